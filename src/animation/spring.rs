use crate::foundation::core::Fps;

/// Physical parameters of a damped spring.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    /// Damping coefficient `c`.
    pub damping: f64,
    /// Stiffness `k`.
    pub stiffness: f64,
    /// Mass `m`.
    pub mass: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            damping: 12.0,
            stiffness: 100.0,
            mass: 0.5,
        }
    }
}

impl SpringConfig {
    /// Damping ratio `zeta`; `< 1` oscillates, `1` is critical, `> 1` creeps.
    pub fn damping_ratio(self) -> f64 {
        let k = self.stiffness.max(0.0);
        let m = self.mass.max(1e-9);
        self.damping.max(0.0) / (2.0 * (k * m).sqrt()).max(1e-9)
    }
}

/// Spring value moving from `from` to `to`, `local_frame` frames after release.
///
/// Evaluated in closed form, so any frame can be queried in any order. Frames at or before the
/// release report `from`.
pub fn spring(local_frame: i64, fps: Fps, from: f64, to: f64, config: SpringConfig) -> f64 {
    if local_frame <= 0 {
        return from;
    }
    let t = fps.frames_to_secs(local_frame);
    from + (to - from) * spring_step(t, config)
}

/// Unit step response of a mass-spring-damper, `x(0) = 0`, `v(0) = 0`, target `1`.
pub(crate) fn spring_step(t: f64, config: SpringConfig) -> f64 {
    let k = config.stiffness.max(0.0);
    let m = config.mass.max(1e-9);

    let w0 = (k / m).sqrt();
    if w0 == 0.0 {
        return 0.0;
    }
    let zeta = config.damping_ratio();

    if (zeta - 1.0).abs() < 1e-6 {
        let e = (-w0 * t).exp();
        1.0 - e * (1.0 + w0 * t)
    } else if zeta < 1.0 {
        let wd = w0 * (1.0 - zeta * zeta).sqrt();
        let e = (-zeta * w0 * t).exp();
        let c1 = (wd * t).cos();
        let s1 = (wd * t).sin();
        let k = zeta / (1.0 - zeta * zeta).sqrt();
        1.0 - e * (c1 + k * s1)
    } else {
        let z2 = (zeta * zeta - 1.0).sqrt();
        let r1 = -w0 * (zeta - z2);
        let r2 = -w0 * (zeta + z2);
        let c2 = (zeta + z2) / (2.0 * z2);
        let c1 = (zeta - z2) / (2.0 * z2);
        1.0 - (c2 * (r1 * t).exp() - c1 * (r2 * t).exp())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
