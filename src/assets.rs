//! Stylesheet and preload link injected into `<head>` at startup.

pub const RUNTIME_STYLE_ID: &str = "knotably-runtime-styles";
pub const FONT_PRELOAD_ID: &str = "knotably-font-preload";

pub const FONT_PRELOAD_HREF: &str = "https://fonts.googleapis.com/css2?family=Cormorant+Garamond:wght@400;600;700&family=Poppins:wght@300;400;500;600&display=swap";

/// Notification toast, gallery ripple, and scrollbar visuals.
pub const RUNTIME_CSS: &str = r#"
    .notification {
        position: fixed;
        bottom: 30px;
        right: 30px;
        padding: 16px 24px;
        border-radius: 8px;
        font-family: 'Poppins', sans-serif;
        font-weight: 500;
        max-width: 300px;
        z-index: 10000;
        opacity: 0;
        transform: translateX(400px);
        transition: all 0.3s cubic-bezier(0.25, 0.46, 0.45, 0.94);
        box-shadow: 0 8px 25px rgba(61, 61, 61, 0.15);
    }

    .notification.show {
        opacity: 1;
        transform: translateX(0);
    }

    .notification-success {
        background: linear-gradient(135deg, #B8D4B8, #B8D4C8);
        color: white;
    }

    .notification-error {
        background: linear-gradient(135deg, #E8B4C8, #D4A8A8);
        color: white;
    }

    .ripple {
        position: absolute;
        border-radius: 50%;
        background: rgba(255, 255, 255, 0.5);
        transform: scale(0);
        animation: ripple-animation 0.6s ease-out;
        pointer-events: none;
    }

    @keyframes ripple-animation {
        to {
            transform: scale(4);
            opacity: 0;
        }
    }

    ::-webkit-scrollbar {
        width: 10px;
    }

    ::-webkit-scrollbar-track {
        background: #f5f5f5;
    }

    ::-webkit-scrollbar-thumb {
        background: linear-gradient(to bottom, #E8B4C8, #D4A574);
        border-radius: 5px;
    }

    ::-webkit-scrollbar-thumb:hover {
        background: linear-gradient(to bottom, #D4A574, #B8D4B8);
    }
"#;

/// A `<link>` element described as attribute pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkSpec {
    pub id: &'static str,
    pub rel: &'static str,
    pub as_: &'static str,
    pub href: &'static str,
}

impl LinkSpec {
    pub fn attributes(&self) -> [(&'static str, &'static str); 4] {
        [
            ("id", self.id),
            ("rel", self.rel),
            ("as", self.as_),
            ("href", self.href),
        ]
    }
}

pub const FONT_PRELOAD: LinkSpec = LinkSpec {
    id: FONT_PRELOAD_ID,
    rel: "preload",
    as_: "style",
    href: FONT_PRELOAD_HREF,
};
