use hexpath::{AstarConfig, HexAStar, Path, PathError, PathRequester, Point, TerrainGrid};
use rand::Rng;

/// Goal picks tried per actor and tick before giving up.
const GOAL_ATTEMPTS: usize = 16;

/// World generation and engine parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimConfig {
    pub width: i32,
    pub height: i32,
    pub actors: usize,
    /// Fraction of tiles turned into walls, `0.0..1.0`.
    pub wall_density: f64,
    pub astar: AstarConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 48,
            height: 24,
            actors: 40,
            wall_density: 0.2,
            astar: AstarConfig::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Actor {
    pub id: usize,
    pub pos: Point,
    pub path: Option<Path>,
    pub arrivals: u32,
}

impl PathRequester for Actor {
    fn pos(&self) -> Point {
        self.pos
    }
}

/// Counters accumulated over the whole run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WorldStats {
    pub ticks: u64,
    pub searches: u64,
    pub found: u64,
    pub no_path: u64,
    pub repaths: u64,
    pub moves: u64,
    pub waits: u64,
    pub arrivals: u64,
    pub expanded: u64,
}

pub struct World {
    terrain: TerrainGrid,
    astar: HexAStar,
    actors: Vec<Actor>,
    stats: WorldStats,
}

impl World {
    /// Build a random map and place actors on free tiles.
    pub fn generate(cfg: &SimConfig, rng: &mut impl Rng) -> Result<Self, PathError> {
        let mut terrain = TerrainGrid::new(cfg.width, cfg.height)?;
        let astar = HexAStar::with_config(cfg.width, cfg.height, cfg.astar)?;

        let density = if cfg.wall_density.is_nan() {
            0.0
        } else {
            cfg.wall_density.clamp(0.0, 0.95)
        };
        let walls: Vec<Point> = terrain
            .grid()
            .range()
            .iter()
            .filter(|_| rng.random_bool(density))
            .collect();
        terrain.add_walls(walls);

        let mut actors = Vec::with_capacity(cfg.actors);
        let free: Vec<Point> = terrain
            .grid()
            .range()
            .iter()
            .filter(|&p| !terrain.is_obstructed(p))
            .collect();
        for id in 0..cfg.actors.min(free.len()) {
            // Pick among the still-free tiles.
            let candidates: Vec<Point> = free
                .iter()
                .copied()
                .filter(|&p| !terrain.is_occupied(p))
                .collect();
            let pos = candidates[rng.random_range(0..candidates.len())];
            terrain.occupy(pos);
            actors.push(Actor {
                id,
                pos,
                path: None,
                arrivals: 0,
            });
        }
        log::info!(
            "generated {}x{} map, {} partitions, {} actors",
            cfg.width,
            cfg.height,
            terrain.partitions().count(),
            actors.len()
        );

        Ok(Self {
            terrain,
            astar,
            actors,
            stats: WorldStats::default(),
        })
    }

    #[inline]
    pub fn terrain(&self) -> &TerrainGrid {
        &self.terrain
    }

    #[inline]
    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    #[inline]
    pub fn stats(&self) -> &WorldStats {
        &self.stats
    }

    /// Advance every actor by at most one tile.
    pub fn tick(&mut self, rng: &mut impl Rng) -> Result<(), PathError> {
        self.stats.ticks += 1;
        for i in 0..self.actors.len() {
            self.step_actor(i, rng)?;
        }
        Ok(())
    }

    fn step_actor(&mut self, i: usize, rng: &mut impl Rng) -> Result<(), PathError> {
        let needs_goal = self.actors[i].path.as_ref().is_none_or(Path::is_finished);
        if needs_goal {
            self.actors[i].path = self.pick_route(i, rng)?;
        }

        let Some(next) = self.actors[i].path.as_ref().and_then(Path::next_pos) else {
            self.stats.waits += 1;
            return Ok(());
        };

        if self.terrain.is_obstructed(next) {
            // Someone walked into the way: re-path to the same target.
            let target = self.actors[i].path.as_ref().map(Path::target);
            self.stats.repaths += 1;
            self.actors[i].path = match target {
                Some(t) => self.route(i, t)?,
                None => None,
            };
            self.stats.waits += 1;
            return Ok(());
        }

        let actor = &mut self.actors[i];
        self.terrain.vacate(actor.pos);
        self.terrain.occupy(next);
        actor.pos = next;
        self.stats.moves += 1;
        if let Some(path) = actor.path.as_mut() {
            path.go_to_next_step();
            if path.is_finished() {
                actor.arrivals += 1;
                self.stats.arrivals += 1;
                log::debug!("actor {} arrived at {}", actor.id, next);
            }
        }
        Ok(())
    }

    fn pick_route(&mut self, i: usize, rng: &mut impl Rng) -> Result<Option<Path>, PathError> {
        let (w, h) = (self.terrain.width(), self.terrain.height());
        for _ in 0..GOAL_ATTEMPTS {
            let goal = Point::new(rng.random_range(0..w), rng.random_range(0..h));
            if goal == self.actors[i].pos || self.terrain.is_obstructed(goal) {
                continue;
            }
            if let Some(path) = self.route(i, goal)? {
                return Ok(Some(path));
            }
        }
        Ok(None)
    }

    /// Search on behalf of actor `i`. Its own tile is released for the
    /// duration so the search does not start from a blocked tile.
    fn route(&mut self, i: usize, goal: Point) -> Result<Option<Path>, PathError> {
        let actor = &self.actors[i];
        self.terrain.vacate(actor.pos);
        let res = self.astar.find_path(&mut self.terrain, actor, goal);
        self.terrain.occupy(actor.pos);

        let path = res?;
        self.stats.searches += 1;
        self.stats.expanded += u64::from(self.astar.last_search().expanded);
        if path.is_some() {
            self.stats.found += 1;
        } else {
            self.stats.no_path += 1;
        }
        Ok(path)
    }

    /// ASCII view. Rows are indented so hex neighbours line up visually.
    pub fn render(&self) -> String {
        let (w, h) = (self.terrain.width(), self.terrain.height());
        let mut out = String::with_capacity(((w * 2 + h + 1) * h) as usize);
        for y in 0..h {
            for _ in 0..(h - 1 - y) {
                out.push(' ');
            }
            for x in 0..w {
                let p = Point::new(x, y);
                let c = if self.terrain.is_wall(p) {
                    '#'
                } else if self.terrain.is_occupied(p) {
                    '@'
                } else {
                    '.'
                };
                out.push(c);
                out.push(' ');
            }
            out.push('\n');
        }
        out
    }
}
