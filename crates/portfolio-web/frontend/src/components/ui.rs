//! Shared class tokens for cards, badges and buttons.

pub const CARD: &str = "rounded-lg border bg-gray-800/50 backdrop-blur-sm border-gray-700 shadow-2xl";
pub const CARD_HEADER: &str = "flex flex-col space-y-1.5 p-6";
pub const CARD_TITLE: &str =
    "flex items-center gap-3 text-3xl font-semibold leading-none tracking-tight text-white";
pub const CARD_DESCRIPTION: &str = "text-gray-400 text-lg";
pub const CARD_CONTENT: &str = "p-6 pt-0";
pub const TITLE_ICON: &str = "w-8 h-8 text-red-500";

pub const BADGE: &str =
    "inline-flex items-center rounded-full border px-2.5 py-0.5 text-xs font-semibold transition-colors";

pub const BUTTON: &str = "inline-flex items-center justify-center rounded-md font-medium \
    bg-gradient-to-r from-red-600 to-red-700 hover:from-red-700 hover:to-red-800 text-white \
    px-8 py-3 text-lg font-semibold shadow-lg hover:shadow-xl transform hover:scale-105 \
    transition-all duration-300";
