use gdk4::prelude::*;
use gdk4::SeatCapabilities;
use nimbus_engine::DeviceSignals;

/// Reads input capabilities from the default display's seat. `None` when
/// there is no display to ask, e.g. GTK failed to initialise.
pub fn probe() -> Option<DeviceSignals> {
    if gtk4::init().is_err() {
        log::debug!("No display available, skipping device probe");
        return None;
    }

    let seat = gdk4::Display::default()?.default_seat()?;
    let caps = seat.capabilities();

    Some(DeviceSignals::new(
        caps.contains(SeatCapabilities::POINTER),
        caps.contains(SeatCapabilities::TOUCH),
        std::env::consts::OS,
    ))
}

pub fn supports_custom_cursor() -> bool {
    let signals = probe();
    log::debug!("Device signals: {:?}", signals);
    nimbus_engine::supports_custom_cursor(signals.as_ref())
}
