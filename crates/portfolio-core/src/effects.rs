//! Effect runner — the page's two one-shot animation sequences.
//!
//! The mount sequence is registered once per runner lifetime. The reveal
//! sequence is registered on every transition into "skills visible"; the
//! previous reveal scope is reverted first because its card subtree is gone.

use tracing::debug;

use crate::motion::{Ease, Scope, StyleHost, Tween, Vars};
use crate::types::Target;

/// Entrance animation for the header, cards and background blobs.
pub fn mount_sequence() -> Scope {
    let mut scope = Scope::new("mount");
    scope
        .add(
            Tween::from([Target::Hero], Vars::new().y(50.0).opacity(0.0))
                .duration(1.0)
                .ease(Ease::Power3Out),
        )
        .add(
            Tween::from([Target::AboutCard], Vars::new().y(80.0).opacity(0.0))
                .duration(1.0)
                .delay(0.3)
                .ease(Ease::Power3Out),
        )
        .add(
            Tween::from([Target::ContactCard], Vars::new().y(80.0).opacity(0.0))
                .duration(1.0)
                .delay(0.6)
                .ease(Ease::Power3Out),
        )
        .add(
            Tween::from_to(
                [Target::BackgroundPulse(0)],
                Vars::new().scale(1.0).opacity(0.0),
                Vars::new().scale(1.1).opacity(0.2),
            )
            .duration(2.0)
            .ease(Ease::SineInOut),
        )
        .add(
            Tween::from_to(
                [Target::BackgroundPulse(1)],
                Vars::new().scale(1.0).opacity(0.0),
                Vars::new().scale(1.15).opacity(0.2),
            )
            .duration(2.5)
            .delay(0.3)
            .ease(Ease::SineInOut),
        );
    scope
}

/// Skills card entrance plus per-skill bar fills and label slides.
pub fn reveal_sequence(skill_count: usize) -> Scope {
    let mut scope = Scope::new("reveal");
    scope
        .add(
            Tween::from([Target::SkillsCard], Vars::new().y(50.0).opacity(0.0))
                .duration(0.8)
                .ease(Ease::Power3Out),
        )
        .add(
            Tween::from((0..skill_count).map(Target::SkillBar), Vars::new().scale_x(0.0))
                .duration(1.2)
                .stagger(0.2)
                .delay(0.3)
                .origin("left center")
                .ease(Ease::Power3Out),
        )
        .add(
            Tween::from(
                (0..skill_count).map(Target::SkillLabel),
                Vars::new().x(-30.0).opacity(0.0),
            )
            .duration(0.8)
            .stagger(0.15)
            .delay(0.2)
            .ease(Ease::Power3Out),
        );
    scope
}

#[derive(Debug, Default)]
pub struct EffectRunner {
    mount: Option<Scope>,
    reveal: Option<Scope>,
    skills_visible: bool,
    mount_registrations: u32,
    reveal_registrations: u32,
}

impl EffectRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register and start the mount sequence, writing its first frame to
    /// `host` so no region is seen before its start state. Later calls are
    /// ignored.
    pub fn mount(&mut self, now: f64, host: &mut impl StyleHost) -> bool {
        if self.mount_registrations > 0 {
            return false;
        }
        let mut scope = mount_sequence();
        scope.start(now);
        scope.tick(now, host);
        debug!("Sequence {} registered at {:.3}s", scope.label(), now);
        self.mount = Some(scope);
        self.mount_registrations += 1;
        true
    }

    /// Observe the current skills visibility. Returns `true` when a new
    /// reveal sequence was registered; its first frame is already applied.
    pub fn set_skills_visible(
        &mut self,
        visible: bool,
        skill_count: usize,
        now: f64,
        host: &mut impl StyleHost,
    ) -> bool {
        if visible == self.skills_visible {
            return false;
        }
        self.skills_visible = visible;

        if let Some(mut old) = self.reveal.take() {
            old.revert(host);
            debug!("Sequence {} reverted", old.label());
        }
        if !visible {
            return false;
        }

        let mut scope = reveal_sequence(skill_count);
        scope.start(now);
        scope.tick(now, host);
        self.reveal_registrations += 1;
        debug!(
            "Sequence {} #{} registered for {} skills",
            scope.label(),
            self.reveal_registrations,
            skill_count
        );
        self.reveal = Some(scope);
        true
    }

    /// Advance every live scope. Returns `true` while anything is moving.
    pub fn tick(&mut self, now: f64, host: &mut impl StyleHost) -> bool {
        let mut running = false;
        for scope in self.mount.iter_mut().chain(self.reveal.iter_mut()) {
            running |= scope.tick(now, host);
        }
        running
    }

    /// Revert everything this runner registered. Used when the page unmounts.
    pub fn teardown(&mut self, host: &mut impl StyleHost) {
        for mut scope in self.mount.take().into_iter().chain(self.reveal.take()) {
            scope.revert(host);
        }
    }

    pub fn mount_registrations(&self) -> u32 {
        self.mount_registrations
    }

    pub fn reveal_registrations(&self) -> u32 {
        self.reveal_registrations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::tests::{close, RecordingHost};

    /// Expected timing and values for one tween of a sequence.
    struct Expected {
        targets: Vec<Target>,
        delay: f64,
        stagger: f64,
        duration: f64,
        from: Vars,
        to: Vars,
        ease: Ease,
        origin: Option<&'static str>,
    }

    fn close_opt(a: Option<f64>, b: Option<f64>) -> bool {
        match (a, b) {
            (Some(a), Some(b)) => (a - b).abs() < 1e-6,
            (None, None) => true,
            _ => false,
        }
    }

    fn assert_vars(actual: Vars, expected: Vars, what: &str) {
        assert!(
            close_opt(actual.x, expected.x)
                && close_opt(actual.y, expected.y)
                && close_opt(actual.opacity, expected.opacity)
                && close_opt(actual.scale, expected.scale)
                && close_opt(actual.scale_x, expected.scale_x),
            "{}: got {:?}, want {:?}",
            what,
            actual,
            expected
        );
    }

    fn blend(from: Vars, to: Vars, t: f64) -> Vars {
        let mix = |a: Option<f64>, b: Option<f64>| a.zip(b).map(|(a, b)| a + (b - a) * t);
        Vars {
            x: mix(from.x, to.x),
            y: mix(from.y, to.y),
            opacity: mix(from.opacity, to.opacity),
            scale: mix(from.scale, to.scale),
            scale_x: mix(from.scale_x, to.scale_x),
        }
    }

    /// Walk every tween of `scope` against `table`, sampling each target
    /// before its start, at its start, halfway and at its end.
    fn assert_sequence(scope: &Scope, table: &[Expected]) {
        let tweens = scope.tweens();
        assert_eq!(tweens.len(), table.len());

        for (n, (tween, want)) in tweens.iter().zip(table).enumerate() {
            assert_eq!(tween.targets(), want.targets.as_slice(), "tween {}", n);
            for i in 0..want.targets.len() {
                let what = format!("tween {} target {:?}", n, want.targets[i]);
                let start = want.delay + want.stagger * i as f64;
                assert!(close(tween.start_offset(i), start), "{} offset", what);

                let frame = tween.sample(i, start);
                assert_eq!(frame.vars, want.from, "{} at start", what);
                assert_eq!(frame.origin, want.origin, "{} origin", what);
                if start > 0.0 {
                    assert_eq!(tween.sample(i, start / 2.0).vars, want.from, "{} in delay", what);
                }

                let half = tween.sample(i, start + want.duration / 2.0).vars;
                assert_vars(half, blend(want.from, want.to, want.ease.apply(0.5)), &what);

                let just_before = tween.sample(i, start + want.duration - 0.01).vars;
                assert_ne!(just_before, want.to, "{} settled early", what);
                assert_vars(tween.sample(i, start + want.duration).vars, want.to, &what);
            }
            let last = want.targets.len().saturating_sub(1) as f64;
            let total = if want.targets.is_empty() {
                0.0
            } else {
                want.delay + want.stagger * last + want.duration
            };
            assert!(close(tween.total_duration(), total), "tween {} total", n);
        }
    }

    #[test]
    fn test_mount_sequence_timings() {
        let fade_up = |y: f64| Vars::new().y(y).opacity(0.0);
        let rest = Vars::new().y(0.0).opacity(1.0);
        assert_sequence(
            &mount_sequence(),
            &[
                Expected {
                    targets: vec![Target::Hero],
                    delay: 0.0,
                    stagger: 0.0,
                    duration: 1.0,
                    from: fade_up(50.0),
                    to: rest,
                    ease: Ease::Power3Out,
                    origin: None,
                },
                Expected {
                    targets: vec![Target::AboutCard],
                    delay: 0.3,
                    stagger: 0.0,
                    duration: 1.0,
                    from: fade_up(80.0),
                    to: rest,
                    ease: Ease::Power3Out,
                    origin: None,
                },
                Expected {
                    targets: vec![Target::ContactCard],
                    delay: 0.6,
                    stagger: 0.0,
                    duration: 1.0,
                    from: fade_up(80.0),
                    to: rest,
                    ease: Ease::Power3Out,
                    origin: None,
                },
                Expected {
                    targets: vec![Target::BackgroundPulse(0)],
                    delay: 0.0,
                    stagger: 0.0,
                    duration: 2.0,
                    from: Vars::new().scale(1.0).opacity(0.0),
                    to: Vars::new().scale(1.1).opacity(0.2),
                    ease: Ease::SineInOut,
                    origin: None,
                },
                Expected {
                    targets: vec![Target::BackgroundPulse(1)],
                    delay: 0.3,
                    stagger: 0.0,
                    duration: 2.5,
                    from: Vars::new().scale(1.0).opacity(0.0),
                    to: Vars::new().scale(1.15).opacity(0.2),
                    ease: Ease::SineInOut,
                    origin: None,
                },
            ],
        );
    }

    #[test]
    fn test_reveal_sequence_timings() {
        assert_sequence(
            &reveal_sequence(6),
            &[
                Expected {
                    targets: vec![Target::SkillsCard],
                    delay: 0.0,
                    stagger: 0.0,
                    duration: 0.8,
                    from: Vars::new().y(50.0).opacity(0.0),
                    to: Vars::new().y(0.0).opacity(1.0),
                    ease: Ease::Power3Out,
                    origin: None,
                },
                Expected {
                    targets: (0..6).map(Target::SkillBar).collect(),
                    delay: 0.3,
                    stagger: 0.2,
                    duration: 1.2,
                    from: Vars::new().scale_x(0.0),
                    to: Vars::new().scale_x(1.0),
                    ease: Ease::Power3Out,
                    origin: Some("left center"),
                },
                Expected {
                    targets: (0..6).map(Target::SkillLabel).collect(),
                    delay: 0.2,
                    stagger: 0.15,
                    duration: 0.8,
                    from: Vars::new().x(-30.0).opacity(0.0),
                    to: Vars::new().x(0.0).opacity(1.0),
                    ease: Ease::Power3Out,
                    origin: None,
                },
            ],
        );
    }

    #[test]
    fn test_mount_registered_once() {
        let mut runner = EffectRunner::new();
        let mut host = RecordingHost::default();
        assert!(runner.mount(0.0, &mut host));
        let applies = host.applies;
        assert!(!runner.mount(1.0, &mut host));
        assert!(!runner.mount(2.0, &mut host));
        assert_eq!(runner.mount_registrations(), 1);
        // Ignored calls write nothing
        assert_eq!(host.applies, applies);
    }

    #[test]
    fn test_registration_writes_start_values() {
        let mut runner = EffectRunner::new();
        let mut host = RecordingHost::default();

        // No tick in between: registration alone must hide every region
        runner.mount(0.0, &mut host);
        assert_eq!(host.opacity(Target::Hero), Some("0"));
        assert_eq!(host.transform(Target::Hero), Some("translate(0px, 50px)"));
        assert_eq!(host.transform(Target::AboutCard), Some("translate(0px, 80px)"));
        assert_eq!(host.opacity(Target::ContactCard), Some("0"));
        assert_eq!(host.opacity(Target::BackgroundPulse(1)), Some("0"));

        runner.set_skills_visible(true, 6, 0.0, &mut host);
        assert_eq!(host.transform(Target::SkillsCard), Some("translate(0px, 50px)"));
        assert_eq!(host.opacity(Target::SkillsCard), Some("0"));
        for i in 0..6 {
            assert_eq!(host.transform(Target::SkillBar(i)), Some("scaleX(0)"));
            assert_eq!(host.transform(Target::SkillLabel(i)), Some("translate(-30px, 0px)"));
            assert_eq!(host.opacity(Target::SkillLabel(i)), Some("0"));
        }
    }

    #[test]
    fn test_mount_initial_frame_hides_regions() {
        let mut runner = EffectRunner::new();
        let mut host = RecordingHost::default();
        runner.mount(0.0, &mut host);
        assert!(runner.tick(0.0, &mut host));

        assert_eq!(host.opacity(Target::Hero), Some("0"));
        assert_eq!(host.transform(Target::AboutCard), Some("translate(0px, 80px)"));
        assert_eq!(host.transform(Target::BackgroundPulse(1)), Some("scale(1)"));

        assert!(!runner.tick(3.0, &mut host));
        assert_eq!(host.transform(Target::Hero), Some("translate(0px, 0px)"));
        assert_eq!(host.transform(Target::BackgroundPulse(0)), Some("scale(1.1)"));
        assert_eq!(host.transform(Target::BackgroundPulse(1)), Some("scale(1.15)"));
        assert_eq!(host.opacity(Target::BackgroundPulse(1)), Some("0.2"));
    }

    #[test]
    fn test_reveal_registered_once_per_transition() {
        let mut runner = EffectRunner::new();
        let mut host = RecordingHost::default();

        assert!(!runner.set_skills_visible(false, 6, 0.0, &mut host));
        assert!(runner.set_skills_visible(true, 6, 1.0, &mut host));
        // Re-renders while visible
        assert!(!runner.set_skills_visible(true, 6, 1.5, &mut host));
        assert!(!runner.set_skills_visible(true, 6, 2.0, &mut host));
        assert_eq!(runner.reveal_registrations(), 1);

        assert!(!runner.set_skills_visible(false, 6, 3.0, &mut host));
        assert!(host.styles.is_empty());
        assert!(!runner.tick(3.5, &mut host));
        assert!(runner.set_skills_visible(true, 6, 4.0, &mut host));
        assert_eq!(runner.reveal_registrations(), 2);
    }

    #[test]
    fn test_hide_reverts_inflight_reveal() {
        let mut runner = EffectRunner::new();
        let mut host = RecordingHost::default();

        runner.set_skills_visible(true, 6, 0.0, &mut host);
        runner.tick(0.1, &mut host);
        assert!(host.styles.contains_key(&Target::SkillBar(5)));
        assert_eq!(
            host.styles[&Target::SkillBar(0)].2.as_deref(),
            Some("left center")
        );

        runner.set_skills_visible(false, 6, 0.2, &mut host);
        assert!(host.styles.is_empty());
        assert!(host.cleared.contains(&Target::SkillsCard));
        assert!(host.cleared.contains(&Target::SkillLabel(3)));
        assert!(!runner.tick(0.3, &mut host));
        assert!(host.styles.is_empty());
    }

    #[test]
    fn test_reveal_targets_one_per_skill() {
        let scope = reveal_sequence(6);
        let tweens = scope.tweens();
        assert_eq!(tweens[1].targets().len(), 6);
        assert_eq!(tweens[2].targets().len(), 6);
        assert_eq!(tweens[1].targets()[4], Target::SkillBar(4));
        assert_eq!(tweens[2].targets()[0], Target::SkillLabel(0));
    }

    #[test]
    fn test_reveal_with_no_skills_only_animates_card() {
        let mut runner = EffectRunner::new();
        let mut host = RecordingHost::default();
        runner.set_skills_visible(true, 0, 0.0, &mut host);
        runner.tick(0.0, &mut host);
        assert_eq!(host.styles.len(), 1);
        assert!(host.styles.contains_key(&Target::SkillsCard));
        assert!(!runner.tick(1.0, &mut host));
    }

    #[test]
    fn test_bars_fill_left_to_right() {
        let mut runner = EffectRunner::new();
        let mut host = RecordingHost::default();
        runner.set_skills_visible(true, 6, 0.0, &mut host);

        // 0.6s in: bar 0 started at 0.3, bar 1 at 0.5, bar 2 not yet
        runner.tick(0.6, &mut host);
        assert_ne!(host.transform(Target::SkillBar(0)), Some("scaleX(0)"));
        assert_ne!(host.transform(Target::SkillBar(1)), Some("scaleX(0)"));
        assert_eq!(host.transform(Target::SkillBar(2)), Some("scaleX(0)"));

        assert!(!runner.tick(10.0, &mut host));
        for i in 0..6 {
            assert_eq!(host.transform(Target::SkillBar(i)), Some("scaleX(1)"));
        }
    }

    #[test]
    fn test_teardown_reverts_everything() {
        let mut runner = EffectRunner::new();
        let mut host = RecordingHost::default();
        runner.mount(0.0, &mut host);
        runner.set_skills_visible(true, 6, 0.0, &mut host);
        runner.tick(0.5, &mut host);
        assert!(!host.styles.is_empty());

        runner.teardown(&mut host);
        assert!(host.styles.is_empty());
        assert!(!runner.tick(0.6, &mut host));
        assert!(host.styles.is_empty());
    }
}
