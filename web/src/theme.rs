use clap::ValueEnum;

#[derive(Copy, Clone, Debug, Default, PartialEq, ValueEnum)]
pub(crate) enum Theme {
    #[default]
    Neon,
    Light,
    Dark,
}

impl Theme {
    pub const ATTR_NAME: &'static str = "data-theme";

    pub(crate) const fn scheme(self) -> &'static str {
        use Theme::*;
        match self {
            Neon => "neon",
            Light => "light",
            Dark => "dark",
        }
    }

    pub(crate) fn apply(self) {
        use gloo::utils::document;
        let Some(html) = document().document_element() else {
            log::error!("no html element to apply theme to");
            return;
        };
        let scheme = self.scheme();
        log::debug!("theme-scheme: {}", scheme);
        if let Err(err) = html.set_attribute(Self::ATTR_NAME, scheme) {
            log::error!("failed to set theme: {:?}", err);
        }
    }
}
