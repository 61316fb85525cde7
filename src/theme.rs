#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Tailwind classes for every themed surface of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub page: &'static str,
    pub nav: &'static str,
    pub surface: &'static str,
    pub accent: &'static str,
    pub subheading: &'static str,
    pub link: &'static str,
    pub nav_link: &'static str,
    pub toggle: &'static str,
    pub marquee: &'static str,
    pub typed: &'static str,
    pub skill_chip: &'static str,
    pub skill_track: &'static str,
    pub skill_level: &'static str,
    pub contact_text: &'static str,
    pub footer: &'static str,
}

const LIGHT: Palette = Palette {
    page: "bg-orange-50 text-gray-900",
    nav: "bg-white",
    surface: "bg-white",
    accent: "text-orange-700",
    subheading: "text-orange-700",
    link: "text-orange-600",
    nav_link: "hover:text-orange-600",
    toggle: "border-orange-700 text-orange-700",
    marquee: "bg-orange-300 text-orange-900",
    typed: "text-orange-600",
    skill_chip: "bg-orange-100",
    skill_track: "bg-orange-300",
    skill_level: "text-orange-800",
    contact_text: "text-gray-700",
    footer: "bg-orange-600 text-white",
};

const DARK: Palette = Palette {
    page: "bg-gray-900 text-gray-100",
    nav: "bg-gray-800",
    surface: "bg-gray-800",
    accent: "text-orange-400",
    subheading: "text-orange-300",
    link: "text-orange-300",
    nav_link: "hover:text-orange-300",
    toggle: "border-orange-400 text-orange-400",
    marquee: "bg-orange-700 text-orange-50",
    typed: "text-orange-400",
    skill_chip: "bg-orange-900",
    skill_track: "bg-orange-700",
    skill_level: "text-orange-300",
    contact_text: "text-gray-300",
    footer: "bg-gray-900 text-orange-400",
};

impl Theme {
    pub fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            Self::Light => &LIGHT,
            Self::Dark => &DARK,
        }
    }

    /// Label for the toggle button, naming the theme it switches *to*.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Dark Mode",
            Self::Dark => "Light Mode",
        }
    }

    /// Value for the `color-scheme` meta tag so native controls match.
    pub fn color_scheme(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dark_mode() {
        assert_eq!(Theme::from_dark_mode(false), Theme::Light);
        assert_eq!(Theme::from_dark_mode(true), Theme::Dark);
        assert_eq!(Theme::default(), Theme::Light);
        assert!(Theme::Dark.is_dark());
        assert!(!Theme::Light.is_dark());
    }

    #[test]
    fn test_toggle_label_names_other_theme() {
        assert_eq!(Theme::Light.toggle_label(), "Dark Mode");
        assert_eq!(Theme::Dark.toggle_label(), "Light Mode");
    }

    #[test]
    fn test_palettes_differ_where_themed() {
        let light = Theme::Light.palette();
        let dark = Theme::Dark.palette();
        assert_ne!(light.page, dark.page);
        assert_ne!(light.nav, dark.nav);
        assert_ne!(light.surface, dark.surface);
        assert_ne!(light.marquee, dark.marquee);
        assert_ne!(light.footer, dark.footer);
        assert!(dark.page.contains("bg-gray-900"));
        assert!(light.page.contains("bg-orange-50"));
    }

    #[test]
    fn test_color_scheme() {
        assert_eq!(Theme::Light.color_scheme(), "light");
        assert_eq!(Theme::Dark.color_scheme(), "dark");
    }
}
