use vibeconnect_core::NavDirection;
use vibeconnect_core::SectionId;

/// Events flowing through the app channel. Input handlers and widgets send
/// these instead of reaching into the router directly; the composition root
/// is the only place they are acted on.
#[derive(Debug)]
pub enum AppEvent {
    /// Request a switch to the given section (sidebar click).
    SwitchSection(SectionId),
    /// Request a switch to the previous/next section (arrow-key traversal).
    Navigate(NavDirection),
    /// Move through the fragment history and re-sync the router.
    HistoryBack,
    HistoryForward,
    /// Toggle the cosmetic full-page filter.
    ToggleParty,
    /// Leave the app.
    Exit,
}
