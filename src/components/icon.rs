//! Icon Component
//!
//! Maps icon names used by the content data to glyphs.

use leptos::prelude::*;

/// Glyph for an icon name, a bullet for unknown names
pub fn icon_glyph(name: &str) -> &'static str {
    match name {
        "Home" => "🏠",
        "Download" => "⬇",
        "Code" => "⌨",
        "Book" | "BookOpen" => "📖",
        "HelpCircle" => "❓",
        "MessageCircle" | "MessageSquare" => "💬",
        "Menu" => "☰",
        "Github" => "🐙",
        "Moon" => "🌙",
        "Rocket" => "🚀",
        "Zap" => "⚡",
        "Settings" => "⚙",
        "Mail" => "✉",
        "TestTube" => "🧪",
        "FileText" => "📄",
        "FileDown" => "📥",
        "RotateCcw" => "↺",
        "CheckCircle" => "✅",
        "X" => "✕",
        _ => "•",
    }
}

#[component]
pub fn Icon(name: &'static str, #[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <span class=format!("icon {}", class) aria-hidden="true" data-icon=name>
            {icon_glyph(name)}
        </span>
    }
}
