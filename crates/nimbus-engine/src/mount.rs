use strum::Display as StrumDisplay;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay)]
pub enum ClickableKind {
    Anchor,
    Button,
    BoundLabel,
    Select,
    Submit,
    Marked,
}

/// Bindings must keep the handlers they attached so `unbind` removes exactly those.
pub trait Host {
    type Element: Clone + PartialEq;
    type Binding;
    type Ticker;
    type CursorGuard;

    fn hide_page_cursor(&mut self) -> Self::CursorGuard;
    fn restore_page_cursor(&mut self, guard: Self::CursorGuard);

    fn bind_page(&mut self) -> Self::Binding;

    fn clickables(&self) -> Vec<(Self::Element, ClickableKind)>;
    fn bind(&mut self, element: &Self::Element, kind: ClickableKind) -> Self::Binding;
    fn unbind(&mut self, binding: Self::Binding);

    fn start_ticker(&mut self) -> Self::Ticker;
    fn stop_ticker(&mut self, ticker: Self::Ticker);
}

pub struct Mount<H: Host> {
    host: H,
    cursor: Option<H::CursorGuard>,
    page: Option<H::Binding>,
    elements: Vec<(H::Element, H::Binding)>,
    ticker: Option<H::Ticker>,
    mounted: bool,
}

impl<H: Host> Mount<H> {
    pub fn new(mut host: H, show_system_cursor: bool) -> Self {
        let cursor = (!show_system_cursor).then(|| host.hide_page_cursor());
        let page = Some(host.bind_page());

        let mut mount = Self {
            host,
            cursor,
            page,
            elements: Vec::new(),
            ticker: None,
            mounted: true,
        };

        for (element, kind) in mount.host.clickables() {
            mount.register(element, kind);
        }

        mount.ticker = Some(mount.host.start_ticker());
        log::debug!("Cursor mounted with {} clickable elements", mount.elements.len());
        mount
    }

    pub fn register(&mut self, element: H::Element, kind: ClickableKind) -> bool {
        if !self.mounted || self.elements.iter().any(|(e, _)| *e == element) {
            return false;
        }
        log::trace!("Binding {} element", kind);
        let binding = self.host.bind(&element, kind);
        self.elements.push((element, binding));
        true
    }

    pub fn bound_count(&self) -> usize {
        self.elements.len()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Idempotent.
    pub fn teardown(&mut self) {
        if !std::mem::take(&mut self.mounted) {
            return;
        }

        if let Some(ticker) = self.ticker.take() {
            self.host.stop_ticker(ticker);
        }

        let count = self.elements.len();
        for (_, binding) in self.elements.drain(..) {
            self.host.unbind(binding);
        }

        if let Some(page) = self.page.take() {
            self.host.unbind(page);
        }

        if let Some(guard) = self.cursor.take() {
            self.host.restore_page_cursor(guard);
        }

        log::debug!("Cursor unmounted, released {} element bindings", count);
    }
}

impl<H: Host> Drop for Mount<H> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Default)]
    struct Journal {
        next_handler: u32,
        attached: Vec<u32>,
        detached: Vec<u32>,
        tickers_started: u32,
        tickers_stopped: u32,
        cursor_hidden: bool,
        cursor_restores: u32,
    }

    struct FakeHost {
        elements: Vec<(&'static str, ClickableKind)>,
        journal: Rc<RefCell<Journal>>,
    }

    impl FakeHost {
        fn new(elements: Vec<(&'static str, ClickableKind)>) -> (Self, Rc<RefCell<Journal>>) {
            let journal = Rc::new(RefCell::new(Journal::default()));
            (
                Self {
                    elements,
                    journal: journal.clone(),
                },
                journal,
            )
        }

        fn attach(&mut self) -> u32 {
            let mut journal = self.journal.borrow_mut();
            journal.next_handler += 1;
            let id = journal.next_handler;
            journal.attached.push(id);
            id
        }
    }

    impl Host for FakeHost {
        type Element = &'static str;
        type Binding = Vec<u32>;
        type Ticker = u32;
        type CursorGuard = ();

        fn hide_page_cursor(&mut self) {
            self.journal.borrow_mut().cursor_hidden = true;
        }

        fn restore_page_cursor(&mut self, _guard: ()) {
            let mut journal = self.journal.borrow_mut();
            journal.cursor_hidden = false;
            journal.cursor_restores += 1;
        }

        fn bind_page(&mut self) -> Vec<u32> {
            (0..3).map(|_| self.attach()).collect()
        }

        fn clickables(&self) -> Vec<(&'static str, ClickableKind)> {
            self.elements.clone()
        }

        fn bind(&mut self, _element: &&'static str, _kind: ClickableKind) -> Vec<u32> {
            // one motion and one button handler per element
            vec![self.attach(), self.attach()]
        }

        fn unbind(&mut self, binding: Vec<u32>) {
            self.journal.borrow_mut().detached.extend(binding);
        }

        fn start_ticker(&mut self) -> u32 {
            let mut journal = self.journal.borrow_mut();
            journal.tickers_started += 1;
            journal.tickers_started
        }

        fn stop_ticker(&mut self, _ticker: u32) {
            self.journal.borrow_mut().tickers_stopped += 1;
        }
    }

    fn page() -> Vec<(&'static str, ClickableKind)> {
        vec![
            ("docs-link", ClickableKind::Anchor),
            ("submit", ClickableKind::Submit),
            ("size-select", ClickableKind::Select),
            ("name-label", ClickableKind::BoundLabel),
        ]
    }

    #[test]
    fn test_mount_binds_every_clickable_once() {
        let (host, journal) = FakeHost::new(page());
        let mount = Mount::new(host, false);

        assert_eq!(mount.bound_count(), 4);
        let journal = journal.borrow();
        assert_eq!(journal.attached.len(), 3 + 4 * 2);
        assert_eq!(journal.tickers_started, 1);
        assert!(journal.cursor_hidden);
    }

    #[test]
    fn test_listener_symmetry_after_teardown() {
        let (host, journal) = FakeHost::new(page());
        let mut mount = Mount::new(host, false);
        mount.register("late-button", ClickableKind::Button);
        mount.teardown();

        let journal = journal.borrow();
        let mut attached = journal.attached.clone();
        let mut detached = journal.detached.clone();
        attached.sort_unstable();
        detached.sort_unstable();
        assert_eq!(attached, detached);
        assert_eq!(journal.tickers_stopped, 1);
        assert!(!journal.cursor_hidden);
    }

    #[test]
    fn test_teardown_is_idempotent() {
        let (host, journal) = FakeHost::new(page());
        let mut mount = Mount::new(host, false);

        mount.teardown();
        mount.teardown();
        drop(mount);

        let journal = journal.borrow();
        assert_eq!(journal.tickers_stopped, 1);
        assert_eq!(journal.cursor_restores, 1);
        assert_eq!(journal.detached.len(), journal.attached.len());
    }

    #[test]
    fn test_drop_releases_everything() {
        let (host, journal) = FakeHost::new(page());
        drop(Mount::new(host, false));

        let journal = journal.borrow();
        assert_eq!(journal.detached.len(), journal.attached.len());
        assert_eq!(journal.tickers_stopped, 1);
    }

    #[test]
    fn test_register_ignores_duplicates_and_dead_mounts() {
        let (host, journal) = FakeHost::new(page());
        let mut mount = Mount::new(host, false);

        assert!(!mount.register("submit", ClickableKind::Submit));
        assert!(mount.register("extra", ClickableKind::Marked));
        assert_eq!(mount.bound_count(), 5);

        mount.teardown();
        assert!(!mount.register("after", ClickableKind::Button));
        assert_eq!(mount.bound_count(), 0);
        assert_eq!(journal.borrow().attached.len(), 3 + 5 * 2);
    }

    #[test]
    fn test_system_cursor_is_left_alone_when_requested() {
        let (host, journal) = FakeHost::new(Vec::new());
        let mut mount = Mount::new(host, true);
        assert!(!journal.borrow().cursor_hidden);

        mount.teardown();
        assert_eq!(journal.borrow().cursor_restores, 0);
    }
}
