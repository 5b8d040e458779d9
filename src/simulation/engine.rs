//! High-level runtime driver
//!
//! Holds the current [`System`] snapshot and [`PhysicsConfig`], and advances
//! the system once per `tick` while running. Paused simulations never change.

use log::debug;

use crate::simulation::integrator::step_system;
use crate::simulation::params::PhysicsConfig;
use crate::simulation::states::{CelestialBody, System};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationState {
    Paused,
    Running,
}

#[derive(Debug, Clone)]
pub struct Simulation {
    system: System,
    config: PhysicsConfig,
    state: SimulationState,
    steps: u64, // steps executed since the last replace or clear
}

impl Simulation {
    /// Starts running at t = 0
    pub fn new(bodies: Vec<CelestialBody>, config: PhysicsConfig) -> Self {
        Self {
            system: System { bodies, t: 0.0 },
            config,
            state: SimulationState::Running,
            steps: 0,
        }
    }

    pub fn system(&self) -> &System {
        &self.system
    }

    pub fn bodies(&self) -> &[CelestialBody] {
        &self.system.bodies
    }

    pub fn config(&self) -> PhysicsConfig {
        self.config
    }

    pub fn state(&self) -> SimulationState {
        self.state
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn is_running(&self) -> bool {
        self.state == SimulationState::Running
    }

    /// Takes effect from the next tick
    pub fn set_config(&mut self, config: PhysicsConfig) {
        self.config = config;
    }

    pub fn pause(&mut self) {
        debug!("pausing at t = {:.3}", self.system.t);
        self.state = SimulationState::Paused;
    }

    pub fn resume(&mut self) {
        debug!("resuming at t = {:.3}", self.system.t);
        self.state = SimulationState::Running;
    }

    pub fn toggle(&mut self) -> SimulationState {
        match self.state {
            SimulationState::Running => self.pause(),
            SimulationState::Paused => self.resume(),
        }
        self.state
    }

    /// One frame of the run loop: step iff running. Returns whether it stepped.
    pub fn tick(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        step_system(&mut self.system, self.config);
        self.steps += 1;
        true
    }

    /// Tick `frames` times, returns the number of steps actually taken
    pub fn run(&mut self, frames: u64) -> u64 {
        (0..frames).filter(|_| self.tick()).count() as u64
    }

    /// Append a body, e.g. one launched by the user
    pub fn add_body(&mut self, body: CelestialBody) {
        debug!("adding body {} (mass {:.1})", body.id, body.mass);
        self.system.bodies.push(body);
    }

    /// Swap in a whole new collection and pause so it can be inspected
    pub fn replace_bodies(&mut self, bodies: Vec<CelestialBody>) {
        debug!("replacing {} bodies with {}", self.system.bodies.len(), bodies.len());
        self.system = System { bodies, t: 0.0 };
        self.steps = 0;
        self.pause();
    }

    /// Remove every body and restart the clock; the run state is kept
    pub fn clear(&mut self) {
        self.system = System::default();
        self.steps = 0;
    }
}
