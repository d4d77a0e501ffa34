//! Which controller drives the camera.

/// Presentation mode of the device running the controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Not a touch device. The default look controller drives the camera for good.
    Desktop,
    /// Touch device in normal presentation. The multitouch controls drive the camera.
    MobileNormal,
    /// Touch device in immersive presentation. The default look controller drives the camera.
    MobileImmersive,
}

/// The controller currently allowed to drive the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveController {
    /// The multitouch look controls.
    Touch,
    /// The host's default look controller.
    Look,
}

/// A mode change that was accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// `MobileNormal` to `MobileImmersive`.
    EnterImmersive,
    /// `MobileImmersive` to `MobileNormal`.
    ExitImmersive,
}

/// State machine selecting the active controller.
#[derive(Debug, Clone)]
pub struct ModeController {
    mode: Mode,
}

impl ModeController {
    /// Picks the initial mode from the device capability.
    #[must_use]
    pub fn new(is_mobile: bool) -> Self {
        let mode = if is_mobile {
            Mode::MobileNormal
        } else {
            Mode::Desktop
        };
        Self { mode }
    }

    /// The current mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The controller owning the camera in the current mode.
    #[must_use]
    pub fn active_controller(&self) -> ActiveController {
        match self.mode {
            Mode::MobileNormal => ActiveController::Touch,
            Mode::Desktop | Mode::MobileImmersive => ActiveController::Look,
        }
    }

    /// Handles an enter-immersive signal. Returns `None` if it does not apply.
    pub fn enter_immersive(&mut self) -> Option<Transition> {
        match self.mode {
            Mode::MobileNormal => {
                self.mode = Mode::MobileImmersive;
                Some(Transition::EnterImmersive)
            }
            Mode::Desktop | Mode::MobileImmersive => None,
        }
    }

    /// Handles an exit-immersive signal. Returns `None` if it does not apply.
    pub fn exit_immersive(&mut self) -> Option<Transition> {
        match self.mode {
            Mode::MobileImmersive => {
                self.mode = Mode::MobileNormal;
                Some(Transition::ExitImmersive)
            }
            Mode::Desktop | Mode::MobileNormal => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_desktop_is_permanent() {
        let mut mode = ModeController::new(false);
        assert_eq!(mode.mode(), Mode::Desktop);
        assert_eq!(mode.active_controller(), ActiveController::Look);
        assert_eq!(mode.enter_immersive(), None);
        assert_eq!(mode.exit_immersive(), None);
        assert_eq!(mode.mode(), Mode::Desktop);
    }

    #[test]
    fn test_mobile_round_trip() {
        let mut mode = ModeController::new(true);
        assert_eq!(mode.active_controller(), ActiveController::Touch);

        assert_eq!(mode.enter_immersive(), Some(Transition::EnterImmersive));
        assert_eq!(mode.mode(), Mode::MobileImmersive);
        assert_eq!(mode.active_controller(), ActiveController::Look);

        assert_eq!(mode.exit_immersive(), Some(Transition::ExitImmersive));
        assert_eq!(mode.mode(), Mode::MobileNormal);
        assert_eq!(mode.active_controller(), ActiveController::Touch);
    }

    #[test]
    fn test_repeated_signals_ignored() {
        let mut mode = ModeController::new(true);
        assert_eq!(mode.exit_immersive(), None);
        mode.enter_immersive();
        assert_eq!(mode.enter_immersive(), None);
        assert_eq!(mode.mode(), Mode::MobileImmersive);
    }
}
