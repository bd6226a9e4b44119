//! Three-port series and parallel adaptors.
//!
//! Both adaptors join two sub-trees and present a reflection-free parent
//! port upward, so a tree terminates in a root element that never sees its
//! own reflection. Child reflected waves are cached during the scatter-up
//! phase and reused when scattering the parent's incident wave back down.

/// Series adaptor joining two sub-trees.
///
/// Port resistance: `Rp = R1 + R2`
/// Scattering coefficient: `gamma = R1 / Rp`
///
/// scatter-up:   `b3 = -(b1 + b2)`
/// scatter-down: `a1 = b1 - gamma * (b1 + b2 + a3)`
///               `a2 = b2 - (1 - gamma) * (b1 + b2 + a3)`
#[derive(Debug, Clone, Copy)]
pub struct SeriesAdaptor {
    port_resistance: f64,
    gamma: f64,
    // Child reflected waves (cached from scatter_up)
    b1: f64,
    b2: f64,
}

impl SeriesAdaptor {
    pub fn new(r1: f64, r2: f64) -> Self {
        let rp = r1 + r2;
        Self {
            port_resistance: rp,
            gamma: r1 / rp,
            b1: 0.0,
            b2: 0.0,
        }
    }

    /// Recompute when child port resistances change.
    pub fn update_ports(&mut self, r1: f64, r2: f64) {
        self.port_resistance = r1 + r2;
        self.gamma = r1 / self.port_resistance;
    }

    pub fn port_resistance(&self) -> f64 {
        self.port_resistance
    }

    /// Bottom-up: accept child reflected waves, produce parent reflected wave.
    #[inline]
    pub fn scatter_up(&mut self, b1: f64, b2: f64) -> f64 {
        self.b1 = b1;
        self.b2 = b2;
        -(b1 + b2)
    }

    /// Top-down: accept parent incident wave, produce child incident waves.
    /// Returns `(a1, a2)`.
    #[inline]
    pub fn scatter_down(&self, a3: f64) -> (f64, f64) {
        let sum = self.b1 + self.b2 + a3;
        let a1 = self.b1 - self.gamma * sum;
        let a2 = self.b2 - (1.0 - self.gamma) * sum;
        (a1, a2)
    }

    /// Clear cached waves.
    pub fn reset(&mut self) {
        self.b1 = 0.0;
        self.b2 = 0.0;
    }
}

/// Parallel adaptor joining two sub-trees.
///
/// Port resistance: `Rp = R1 * R2 / (R1 + R2)`
/// Scattering coefficient: `gamma = G1 / (G1 + G2) = R2 / (R1 + R2)`
///
/// scatter-up:   `b3 = gamma * b1 + (1 - gamma) * b2`
/// scatter-down: `a1 = b3 + a3 - b1`
///               `a2 = b3 + a3 - b2`
///
/// All three port voltages of a parallel junction coincide, which the
/// scatter relations preserve exactly.
#[derive(Debug, Clone, Copy)]
pub struct ParallelAdaptor {
    port_resistance: f64,
    gamma: f64,
    b1: f64,
    b2: f64,
}

impl ParallelAdaptor {
    pub fn new(r1: f64, r2: f64) -> Self {
        Self {
            port_resistance: r1 * r2 / (r1 + r2),
            gamma: r2 / (r1 + r2),
            b1: 0.0,
            b2: 0.0,
        }
    }

    /// Recompute when child port resistances change.
    pub fn update_ports(&mut self, r1: f64, r2: f64) {
        self.port_resistance = r1 * r2 / (r1 + r2);
        self.gamma = r2 / (r1 + r2);
    }

    pub fn port_resistance(&self) -> f64 {
        self.port_resistance
    }

    /// Bottom-up: produce parent reflected wave.
    #[inline]
    pub fn scatter_up(&mut self, b1: f64, b2: f64) -> f64 {
        self.b1 = b1;
        self.b2 = b2;
        b2 + self.gamma * (b1 - b2)
    }

    /// Top-down: produce child incident waves from parent incident.
    /// Returns `(a1, a2)`.
    #[inline]
    pub fn scatter_down(&self, a3: f64) -> (f64, f64) {
        let b3 = self.b2 + self.gamma * (self.b1 - self.b2);
        let a1 = b3 + a3 - self.b1;
        let a2 = b3 + a3 - self.b2;
        (a1, a2)
    }

    /// Clear cached waves.
    pub fn reset(&mut self) {
        self.b1 = 0.0;
        self.b2 = 0.0;
    }
}
