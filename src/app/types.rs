/**
 * Shared Types Module
 *
 * Defines shared types for the desktop app, including the view enum.
 */

/// Current app view/mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    /// Login screen
    Auth,
    /// Social feed with reactions
    Feed,
    /// Club rooms and chat
    Clubs,
    /// Quizzes and attempts
    Quizzes,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_view_variants() {
        assert_eq!(AppView::Auth, AppView::Auth);
        assert_ne!(AppView::Feed, AppView::Clubs);
    }
}
