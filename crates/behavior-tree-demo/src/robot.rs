//! Patrol robot state and its behavior tree.
use std::sync::{Arc, Mutex, PoisonError};

use behavior_tree::builder::{leaf, not, selector, sequence};
use behavior_tree::{Node, Status};
use tracing::{debug, info};

const FULL_BATTERY: u32 = 10;
const LOW_BATTERY: u32 = 3;
const CHARGE_PER_TICK: u32 = 4;

#[derive(Debug)]
struct State {
    battery: u32,
    visited: u32,
    waypoints: u32,
    charging: bool,
}

/// Shared handle to the robot; the tree's leaves close over it.
#[derive(Clone)]
pub struct Robot {
    state: Arc<Mutex<State>>,
}

impl Robot {
    pub fn new(waypoints: u32) -> Self {
        Self {
            state: Arc::new(Mutex::new(State {
                battery: FULL_BATTERY,
                visited: 0,
                waypoints,
                charging: false,
            })),
        }
    }

    pub fn visited(&self) -> u32 {
        self.with_state(|state| state.visited)
    }

    /// Builds the patrol tree:
    ///
    /// ```text
    /// sequence
    /// ├── not(mission complete)
    /// └── selector
    ///     ├── sequence
    ///     │   ├── battery ok
    ///     │   └── visit next waypoint
    ///     └── recharge (running until full)
    /// ```
    pub fn tree(&self) -> Node {
        sequence(vec![
            not(self.mission_complete()),
            selector(vec![
                sequence(vec![self.battery_ok(), self.visit_waypoint()]),
                self.recharge(),
            ]),
        ])
    }

    fn mission_complete(&self) -> Node {
        let robot = self.clone();
        leaf(move || {
            let done = robot.with_state(|state| state.visited >= state.waypoints);
            Ok(if done { Status::Success } else { Status::Failure })
        })
    }

    fn battery_ok(&self) -> Node {
        let robot = self.clone();
        leaf(move || {
            let ok = robot.with_state(|state| !state.charging && state.battery > LOW_BATTERY);
            Ok(if ok { Status::Success } else { Status::Failure })
        })
    }

    fn visit_waypoint(&self) -> Node {
        let robot = self.clone();
        leaf(move || {
            robot.with_state(|state| {
                state.battery -= 1;
                state.visited += 1;
                info!(
                    waypoint = state.visited,
                    battery = state.battery,
                    "reached waypoint"
                );
            });
            Ok(Status::Success)
        })
    }

    fn recharge(&self) -> Node {
        let robot = self.clone();
        leaf(move || {
            let status = robot.with_state(|state| {
                state.charging = true;
                state.battery = (state.battery + CHARGE_PER_TICK).min(FULL_BATTERY);
                debug!(battery = state.battery, "charging");
                if state.battery == FULL_BATTERY {
                    state.charging = false;
                    Status::Success
                } else {
                    Status::Running
                }
            });
            Ok(status)
        })
    }

    fn with_state<T>(&self, f: impl FnOnce(&mut State) -> T) -> T {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut state)
    }
}
