const MOBILE_PLATFORMS: &[&str] = &[
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "ios",
    "blackberry",
    "iemobile",
    "windows phone",
    "opera mini",
];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeviceSignals {
    pub has_pointer: bool,
    pub has_touch: bool,
    pub platform: String,
}

impl DeviceSignals {
    pub fn new(has_pointer: bool, has_touch: bool, platform: impl Into<String>) -> Self {
        Self {
            has_pointer,
            has_touch,
            platform: platform.into(),
        }
    }

    pub fn is_touch_primary(&self) -> bool {
        self.has_touch && !self.has_pointer
    }

    pub fn is_mobile_platform(&self) -> bool {
        let platform = self.platform.to_ascii_lowercase();
        MOBILE_PLATFORMS.iter().any(|p| platform.contains(p))
    }
}

/// `None` means there is no pointer-capable environment to inspect.
pub fn supports_custom_cursor(env: Option<&DeviceSignals>) -> bool {
    env.is_some_and(|signals| !signals.is_touch_primary() && !signals.is_mobile_platform())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_environment_is_rejected() {
        assert!(!supports_custom_cursor(None));
    }

    #[test]
    fn test_desktop_pointer_is_supported() {
        let desktop = DeviceSignals::new(true, false, "linux");
        assert!(supports_custom_cursor(Some(&desktop)));

        // touchscreen laptops still have a mouse
        let convertible = DeviceSignals::new(true, true, "windows");
        assert!(supports_custom_cursor(Some(&convertible)));

        // no input devices reported at all is not a touch device
        let bare_seat = DeviceSignals::new(false, false, "linux");
        assert!(supports_custom_cursor(Some(&bare_seat)));
    }

    #[test]
    fn test_touch_only_is_rejected() {
        let tablet = DeviceSignals::new(false, true, "linux");
        assert!(!supports_custom_cursor(Some(&tablet)));
    }

    #[test]
    fn test_mobile_platforms_are_rejected() {
        for platform in [
            "android",
            "iOS",
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0)",
            "webOS",
        ] {
            let phone = DeviceSignals::new(true, true, platform);
            assert!(!supports_custom_cursor(Some(&phone)), "{platform}");
        }
    }

    #[test]
    fn test_decision_is_deterministic() {
        let desktop = DeviceSignals::new(true, false, "macos");
        let results: Vec<_> = (0..4)
            .map(|_| supports_custom_cursor(Some(&desktop)))
            .collect();
        assert_eq!(results, vec![true; 4]);
    }
}
