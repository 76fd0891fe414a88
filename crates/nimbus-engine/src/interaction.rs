use strum::{Display as StrumDisplay, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, StrumDisplay)]
pub enum Interaction {
    #[default]
    Idle,
    /// Button held down away from any clickable element.
    Held,
    Hovering,
    /// Button held down on a clickable element.
    Pressing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, StrumDisplay)]
pub enum Trigger {
    PointerDown,
    PointerUp,
    HoverIn,
    HoverOut,
    ElementPress,
    ElementRelease,
    ElementClick,
}

impl Interaction {
    pub fn on(self, trigger: Trigger) -> Self {
        use Interaction::*;

        match (self, trigger) {
            (_, Trigger::HoverOut) => Idle,
            (_, Trigger::ElementPress) => Pressing,
            (_, Trigger::ElementRelease | Trigger::ElementClick) => Hovering,
            (Pressing, Trigger::HoverIn) => Pressing,
            (_, Trigger::HoverIn) => Hovering,
            (Idle | Held, Trigger::PointerDown) => Held,
            (Idle | Held, Trigger::PointerUp) => Idle,
            (Hovering, Trigger::PointerDown | Trigger::PointerUp) => Hovering,
            (Pressing, Trigger::PointerDown) => Pressing,
            (Pressing, Trigger::PointerUp) => Hovering,
        }
    }

    /// `(active, active_clickable)`
    pub fn flags(self) -> (bool, bool) {
        match self {
            Self::Idle => (false, false),
            Self::Held | Self::Hovering => (true, false),
            Self::Pressing => (true, true),
        }
    }

    pub fn is_active(self) -> bool {
        self.flags().0
    }

    pub fn is_pressing(self) -> bool {
        self.flags().1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_transition_table() {
        use Interaction::*;
        use Trigger::*;

        let cases = vec![
            (Idle, PointerDown, Held),
            (Idle, PointerUp, Idle),
            (Idle, HoverIn, Hovering),
            (Idle, HoverOut, Idle),
            (Idle, ElementPress, Pressing),
            (Idle, ElementRelease, Hovering),
            (Idle, ElementClick, Hovering),
            (Held, PointerDown, Held),
            (Held, PointerUp, Idle),
            (Held, HoverIn, Hovering),
            (Held, HoverOut, Idle),
            (Held, ElementPress, Pressing),
            (Held, ElementRelease, Hovering),
            (Held, ElementClick, Hovering),
            (Hovering, PointerDown, Hovering),
            (Hovering, PointerUp, Hovering),
            (Hovering, HoverIn, Hovering),
            (Hovering, HoverOut, Idle),
            (Hovering, ElementPress, Pressing),
            (Hovering, ElementRelease, Hovering),
            (Hovering, ElementClick, Hovering),
            (Pressing, PointerDown, Pressing),
            (Pressing, PointerUp, Hovering),
            (Pressing, HoverIn, Pressing),
            (Pressing, HoverOut, Idle),
            (Pressing, ElementPress, Pressing),
            (Pressing, ElementRelease, Hovering),
            (Pressing, ElementClick, Hovering),
        ];
        assert_eq!(cases.len(), Interaction::iter().count() * Trigger::iter().count());

        for (from, trigger, expected) in cases {
            assert_eq!(from.on(trigger), expected, "{from} --{trigger}-->");
        }
    }

    #[test]
    fn test_hover_press_release_cycle() {
        let state = Interaction::Idle
            .on(Trigger::HoverIn)
            .on(Trigger::PointerDown)
            .on(Trigger::ElementPress);
        assert_eq!(state, Interaction::Pressing);

        let state = state.on(Trigger::PointerUp).on(Trigger::ElementRelease);
        assert_eq!(state, Interaction::Hovering);

        assert_eq!(state.on(Trigger::HoverOut), Interaction::Idle);
    }

    #[test]
    fn test_page_press_outside_clickables() {
        let held = Interaction::Idle.on(Trigger::PointerDown);
        assert_eq!(held, Interaction::Held);
        assert_eq!(held.flags(), (true, false));
        assert_eq!(held.on(Trigger::PointerUp), Interaction::Idle);
    }

    #[test]
    fn test_press_without_prior_hover_enters_pressing() {
        assert_eq!(Interaction::Idle.on(Trigger::ElementPress), Interaction::Pressing);
        assert_eq!(Interaction::Held.on(Trigger::ElementPress), Interaction::Pressing);
    }

    #[test]
    fn test_hover_out_always_clears() {
        for state in Interaction::iter() {
            assert_eq!(state.on(Trigger::HoverOut), Interaction::Idle, "from {state}");
        }
    }

    #[test]
    fn test_every_transition_lands_on_a_single_state() {
        for state in Interaction::iter() {
            for trigger in Trigger::iter() {
                let next = state.on(trigger);
                let (active, clickable) = next.flags();
                // pressing implies active; no ambiguous (false, true) pair
                assert!(active || !clickable, "{state} --{trigger}--> {next}");
            }
        }
    }
}
