//! Color Constants for the Portal Theme
//!
//! Navy/slate palette used throughout the desktop shell.

use eframe::egui::Color32;

/// Dark background for main areas
pub const BG_DARK: Color32 = Color32::from_rgb(0x1B, 0x24, 0x30);

/// Top bar background
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0x14, 0x1C, 0x26);

/// Sidebar / panel background
pub const PANEL_BG: Color32 = Color32::from_rgb(0x22, 0x2E, 0x3C);

/// Card background (posts, notifications, questions)
pub const CARD_BG: Color32 = Color32::from_rgb(0x2A, 0x38, 0x48);

/// Text on dark backgrounds
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xE8, 0xEE, 0xF4);

/// Secondary text color (muted)
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x8F, 0xA1, 0xB3);

/// Accent color for highlights and primary buttons
pub const ACCENT: Color32 = Color32::from_rgb(0x3D, 0x7E, 0xC4);

/// Unread badge background
pub const UNREAD_BADGE: Color32 = Color32::from_rgb(0xC4, 0x50, 0x3D);

/// Success color
pub const SUCCESS: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x50);

/// Error color
pub const ERROR: Color32 = Color32::from_rgb(0xE5, 0x73, 0x73);

/// Warning color
pub const WARNING: Color32 = Color32::from_rgb(0xFF, 0xA7, 0x26);

/// Online status indicator
pub const STATUS_ONLINE: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x50);

/// Offline status indicator
pub const STATUS_OFFLINE: Color32 = Color32::from_rgb(0x9E, 0x9E, 0x9E);

/// Timestamp text color
pub const TIMESTAMP: Color32 = Color32::from_rgb(0x6E, 0x80, 0x92);
