//! Path following that re-plans whenever the follower changes cell
//!
//! The controller owns its follower's state and is driven by the host loop
//! calling [`FollowController::tick`] once per frame. Path search and path
//! walking stay with the host through [`PathFinder`] and [`PathWalker`].

use tracing::debug;

use crate::spatial::cell::{Cell, CellPath};

/// Entity handle whose grid cell can be queried
pub trait Locate {
    /// Cell the entity currently occupies
    fn cell(&self) -> Cell;
}

/// Shortest path search between two cells
pub trait PathFinder {
    /// Path from `from` to `to`, empty when there is none
    fn find_path(&mut self, from: Cell, to: Cell) -> CellPath;
}

/// Moves an entity along a path
pub trait PathWalker<E> {
    /// Start moving `entity` along `path` at `speed`
    ///
    /// An empty path with speed 0 halts the entity.
    fn follow_path(&mut self, entity: &E, path: &[Cell], speed: f64);
}

/// Whether a controller is currently chasing its target
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum FollowState {
    /// Not following; ticks do nothing
    #[default]
    Idle,
    /// Walking a path towards the target
    Following,
}

/// Drives one follower towards a moving target
pub struct FollowController<F, T, P, W> {
    follower: F,
    target: Option<T>,
    pathfinder: P,
    walker: W,
    state: FollowState,
    path: CellPath,
    speed: f64,
    last_cell: Cell,
}

impl<F, T, P, W> FollowController<F, T, P, W>
where
    F: Locate,
    T: Locate,
    P: PathFinder,
    W: PathWalker<F>,
{
    /// Create an idle controller for `follower`
    pub fn new(follower: F, pathfinder: P, walker: W) -> Self {
        let last_cell = follower.cell();
        Self {
            follower,
            target: None,
            pathfinder,
            walker,
            state: FollowState::Idle,
            path: Vec::new(),
            speed: 0.0,
            last_cell,
        }
    }

    /// Begin following `target` at `speed`
    ///
    /// Plans and hands over a path immediately.
    pub fn start(&mut self, target: T, speed: f64) {
        self.target = Some(target);
        self.speed = speed;
        self.state = FollowState::Following;
        self.plan_from_current_cell();
    }

    /// Per-frame update
    ///
    /// Re-plans only when the follower has moved to a different cell since
    /// the last plan.
    pub fn tick(&mut self) {
        if self.state != FollowState::Following {
            return;
        }
        if self.follower.cell() != self.last_cell {
            self.plan_from_current_cell();
        }
    }

    /// Stop following and halt the follower
    pub fn stop(&mut self) {
        self.state = FollowState::Idle;
        self.path.clear();
        self.walker.follow_path(&self.follower, &self.path, 0.0);
        debug!("follower stopped");
    }

    /// Resume following the stored target
    ///
    /// Only acts when the current path is empty and a target is known.
    /// Returns whether following resumed.
    pub fn resume(&mut self) -> bool {
        if !self.path.is_empty() || self.target.is_none() {
            return false;
        }
        self.state = FollowState::Following;
        self.plan_from_current_cell();
        true
    }

    /// Follow a different target from the next re-plan onwards
    ///
    /// The current path is kept until the follower changes cell; call
    /// [`replan`](Self::replan) to switch immediately.
    pub fn change_target(&mut self, target: T) {
        self.target = Some(target);
    }

    /// Re-plan now from the follower's current cell
    ///
    /// Does nothing while idle.
    pub fn replan(&mut self) {
        if self.state == FollowState::Following {
            self.plan_from_current_cell();
        }
    }

    fn plan_from_current_cell(&mut self) {
        let Some(target) = &self.target else {
            return;
        };
        let from = self.follower.cell();
        let to = target.cell();
        self.path = self.pathfinder.find_path(from, to);
        self.walker.follow_path(&self.follower, &self.path, self.speed);
        self.last_cell = from;
        debug!(%from, %to, steps = self.path.len(), "follower re-planned");
    }

    /// Current state
    pub const fn state(&self) -> FollowState {
        self.state
    }

    /// Whether the controller is following
    pub fn is_following(&self) -> bool {
        self.state == FollowState::Following
    }

    /// Path most recently handed to the walker
    pub fn path(&self) -> &[Cell] {
        &self.path
    }

    /// Speed passed to the walker while following
    pub const fn speed(&self) -> f64 {
        self.speed
    }

    /// Cell recorded at the last plan
    pub const fn last_cell(&self) -> Cell {
        self.last_cell
    }

    /// Entity being driven
    pub const fn follower(&self) -> &F {
        &self.follower
    }

    /// Current target, if any
    pub const fn target(&self) -> Option<&T> {
        self.target.as_ref()
    }

    /// Injected path finder
    pub const fn pathfinder(&self) -> &P {
        &self.pathfinder
    }

    /// Injected path walker
    pub const fn walker(&self) -> &W {
        &self.walker
    }
}
