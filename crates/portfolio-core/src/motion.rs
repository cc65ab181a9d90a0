//! Tween engine — from/to property groups, easing, stagger and scoped revert.
//!
//! Semantics follow GSAP's `from`/`fromTo`: a target shows its start values
//! from the moment its scope starts (even during its delay), interpolates over
//! `duration`, then holds the end values until the scope is reverted.
//! Times are seconds; offsets are CSS pixels.

use std::collections::BTreeSet;

use crate::types::Target;

// ── Easing ──

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ease {
    Linear,
    /// Decelerating cubic, `power3.out`.
    #[default]
    Power3Out,
    /// Sinusoidal ease in and out, `sine.inOut`.
    SineInOut,
}

impl Ease {
    /// Map linear progress in `[0, 1]` to eased progress.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power3Out => 1.0 - (1.0 - t).powi(3),
            Ease::SineInOut => -((std::f64::consts::PI * t).cos() - 1.0) / 2.0,
        }
    }
}

// ── Property sets ──

/// Animatable properties. Unset keys are not touched.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vars {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub opacity: Option<f64>,
    pub scale: Option<f64>,
    pub scale_x: Option<f64>,
}

impl Vars {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn x(mut self, v: f64) -> Self {
        self.x = Some(v);
        self
    }

    pub fn y(mut self, v: f64) -> Self {
        self.y = Some(v);
        self
    }

    pub fn opacity(mut self, v: f64) -> Self {
        self.opacity = Some(v);
        self
    }

    pub fn scale(mut self, v: f64) -> Self {
        self.scale = Some(v);
        self
    }

    pub fn scale_x(mut self, v: f64) -> Self {
        self.scale_x = Some(v);
        self
    }

    /// The resting value for every key set here.
    fn rest(&self) -> Self {
        Self {
            x: self.x.map(|_| 0.0),
            y: self.y.map(|_| 0.0),
            opacity: self.opacity.map(|_| 1.0),
            scale: self.scale.map(|_| 1.0),
            scale_x: self.scale_x.map(|_| 1.0),
        }
    }
}

fn lerp(from: Option<f64>, to: Option<f64>, rest: f64, t: f64) -> Option<f64> {
    match (from, to) {
        (None, None) => None,
        (a, b) => {
            let a = a.unwrap_or(rest);
            let b = b.unwrap_or(rest);
            Some(a + (b - a) * t)
        }
    }
}

// ── Frames ──

/// Sampled style for one target at one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame<'a> {
    pub vars: Vars,
    pub origin: Option<&'a str>,
}

impl Frame<'_> {
    /// CSS `transform`, or `None` when no transform key is animated.
    pub fn transform(&self) -> Option<String> {
        let v = &self.vars;
        let mut parts = Vec::new();
        if v.x.is_some() || v.y.is_some() {
            parts.push(format!(
                "translate({}px, {}px)",
                fmt_num(v.x.unwrap_or(0.0)),
                fmt_num(v.y.unwrap_or(0.0))
            ));
        }
        if let Some(s) = v.scale {
            parts.push(format!("scale({})", fmt_num(s)));
        }
        if let Some(sx) = v.scale_x {
            parts.push(format!("scaleX({})", fmt_num(sx)));
        }
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }

    pub fn opacity(&self) -> Option<String> {
        self.vars.opacity.map(fmt_num)
    }
}

fn fmt_num(v: f64) -> String {
    let s = format!("{:.4}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

// ── Tweens ──

#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    targets: Vec<Target>,
    from: Vars,
    to: Vars,
    duration: f64,
    delay: f64,
    stagger: f64,
    ease: Ease,
    origin: Option<String>,
}

impl Tween {
    /// Animate from `vars` to each key's resting value.
    pub fn from(targets: impl IntoIterator<Item = Target>, vars: Vars) -> Self {
        let to = vars.rest();
        Self::from_to(targets, vars, to)
    }

    pub fn from_to(targets: impl IntoIterator<Item = Target>, from: Vars, to: Vars) -> Self {
        Self {
            targets: targets.into_iter().collect(),
            from,
            to,
            duration: 0.5,
            delay: 0.0,
            stagger: 0.0,
            ease: Ease::default(),
            origin: None,
        }
    }

    pub fn duration(mut self, secs: f64) -> Self {
        self.duration = secs.max(0.0);
        self
    }

    pub fn delay(mut self, secs: f64) -> Self {
        self.delay = secs.max(0.0);
        self
    }

    /// Extra start offset per target, in list order.
    pub fn stagger(mut self, secs: f64) -> Self {
        self.stagger = secs.max(0.0);
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// CSS `transform-origin` while animating, e.g. `"left center"`.
    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    pub fn start_offset(&self, index: usize) -> f64 {
        self.delay + self.stagger * index as f64
    }

    /// Time from scope start until the last target settles.
    pub fn total_duration(&self) -> f64 {
        match self.targets.len() {
            0 => 0.0,
            n => self.start_offset(n - 1) + self.duration,
        }
    }

    /// Style of the `index`-th target `elapsed` seconds after scope start.
    pub fn sample(&self, index: usize, elapsed: f64) -> Frame<'_> {
        let local = elapsed - self.start_offset(index);
        let progress = if local <= 0.0 {
            0.0
        } else if self.duration <= 0.0 || local >= self.duration {
            1.0
        } else {
            local / self.duration
        };
        let t = self.ease.apply(progress);

        Frame {
            vars: Vars {
                x: lerp(self.from.x, self.to.x, 0.0, t),
                y: lerp(self.from.y, self.to.y, 0.0, t),
                opacity: lerp(self.from.opacity, self.to.opacity, 1.0, t),
                scale: lerp(self.from.scale, self.to.scale, 1.0, t),
                scale_x: lerp(self.from.scale_x, self.to.scale_x, 1.0, t),
            },
            origin: self.origin.as_deref(),
        }
    }
}

// ── Host seam ──

/// Where sampled frames land. The browser host writes inline styles.
pub trait StyleHost {
    /// Write `frame` to `target`. Returns `false` if the target is not
    /// present, in which case it is skipped.
    fn apply(&mut self, target: Target, frame: &Frame<'_>) -> bool;

    /// Remove every style previously written to `target`.
    fn clear(&mut self, target: Target);
}

// ── Scopes ──

/// A group of tweens started together and reverted as a unit.
#[derive(Debug)]
pub struct Scope {
    label: &'static str,
    tweens: Vec<Tween>,
    settled: Vec<bool>,
    started_at: Option<f64>,
    touched: BTreeSet<Target>,
    reverted: bool,
}

impl Scope {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            tweens: Vec::new(),
            settled: Vec::new(),
            started_at: None,
            touched: BTreeSet::new(),
            reverted: false,
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn add(&mut self, tween: Tween) -> &mut Self {
        self.tweens.push(tween);
        self.settled.push(false);
        self
    }

    pub fn tweens(&self) -> &[Tween] {
        &self.tweens
    }

    pub fn start(&mut self, now: f64) {
        self.started_at = Some(now);
    }

    /// Render every unsettled tween at `now`. Returns `true` while anything
    /// is still moving.
    pub fn tick(&mut self, now: f64, host: &mut impl StyleHost) -> bool {
        let start = match self.started_at {
            Some(start) if !self.reverted => start,
            _ => return false,
        };
        let elapsed = now - start;
        let mut running = false;

        for (tween, settled) in self.tweens.iter().zip(self.settled.iter_mut()) {
            if *settled {
                continue;
            }
            for (i, target) in tween.targets().iter().enumerate() {
                let frame = tween.sample(i, elapsed);
                if host.apply(*target, &frame) {
                    self.touched.insert(*target);
                }
            }
            if elapsed >= tween.total_duration() {
                *settled = true;
            } else {
                running = true;
            }
        }

        running
    }

    /// Clear every style this scope wrote and stop it for good.
    pub fn revert(&mut self, host: &mut impl StyleHost) {
        for target in std::mem::take(&mut self.touched) {
            host.clear(target);
        }
        self.reverted = true;
    }
}
