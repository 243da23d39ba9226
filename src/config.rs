use log::Level;

/// A single entry of the top navigation. `href` is always a fragment
/// pointing at a rendered section (`#sectionId`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

impl NavItem {
    /// Section id this entry targets, without the leading `#`.
    pub fn target_id(&self) -> &'static str {
        self.href.strip_prefix('#').unwrap_or(self.href)
    }
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Início", href: "#hero" },
    NavItem { label: "Problema", href: "#problema" },
    NavItem { label: "Valor", href: "#valor" },
    NavItem { label: "Metodologia", href: "#metodologia" },
    NavItem { label: "Catálogo", href: "#catalogo-entradas" },
    NavItem { label: "Mapa", href: "#mapa" },
    NavItem { label: "Preço", href: "#preco" },
    NavItem { label: "FAQ", href: "#faq" },
];

pub const WHATSAPP_ENDPOINT: &str = "https://wa.me";
pub const WHATSAPP_NUMBER: &str = "5549991850177";

pub fn whatsapp_base_link() -> String {
    format!("{}/{}", WHATSAPP_ENDPOINT, WHATSAPP_NUMBER)
}

pub const DEFAULT_WHATSAPP_MESSAGE: &str =
    "Olá! Tenho interesse nas soluções de automação + IA da Atlas.Automate e gostaria de entender a melhor opção para o meu negócio.";

// `{date}` is replaced with the pt-BR formatted day.
pub const SCHEDULE_MESSAGE_TEMPLATE: &str =
    "Olá! Tenho interesse nas soluções de automação + IA da Atlas.Automate. Gostaria de agendar uma demonstração para {date}. Podem me passar os próximos passos?";

pub const SCHEDULE_PREVIEW_TEMPLATE: &str =
    "Olá! Tenho interesse nas soluções de automação + IA da Atlas.Automate. Gostaria de agendar uma demonstração para {date}.";

/// Fractions of the viewport cut from the top and bottom of the
/// observation band, plus the intersection ratio threshold.
pub const BAND_TOP_EXCLUSION: f64 = 0.40;
pub const BAND_BOTTOM_EXCLUSION: f64 = 0.55;
pub const BAND_THRESHOLD: f64 = 0.01;

/// BRL per hour used to turn price ranges into hour estimates.
pub const HOURLY_RATE: f64 = 200.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
