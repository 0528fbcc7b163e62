use ratatui::style::Color;

/// Base color palette shared by every component group.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorPalette {
    // Base colors
    pub background: Color,
    pub foreground: Color,
    pub surface: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // UI element colors
    pub border: Color,
    pub border_focused: Color,
    pub selection: Color,
    pub selection_text: Color,

    // Status colors
    pub info: Color,
    pub warning: Color,
    pub error: Color,

    // Special purpose colors
    pub accent: Color,
}

/// Complete color scheme: the palette plus per-component groups.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeColors {
    pub palette: ColorPalette,

    // Component-specific colors
    pub nav: NavColors,
    pub message_list: MessageListColors,
    pub reader: ReaderColors,
    pub status_bar: StatusBarColors,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavColors {
    pub icon: Color,
    pub link: Color,
    pub link_active: Color,
    pub badge: Color,
    pub group_separator: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MessageListColors {
    pub sender_unread: Color,
    pub sender_read: Color,
    pub subject: Color,
    pub preview: Color,
    pub date: Color,
    pub unread_indicator: Color,
    pub label_chip: Color,
    pub tab_active: Color,
    pub tab_inactive: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReaderColors {
    pub header_label: Color,
    pub header_value: Color,
    pub body: Color,
    pub link: Color,
    pub empty: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusBarColors {
    pub background: Color,
    pub text: Color,
    pub section_separator: Color,
}

impl ThemeColors {
    /// Slate dark scheme, the default.
    pub fn slate_dark() -> Self {
        let palette = ColorPalette {
            background: Color::Rgb(15, 23, 42),
            foreground: Color::Rgb(226, 232, 240),
            surface: Color::Rgb(30, 41, 59),

            text_primary: Color::Rgb(226, 232, 240),
            text_secondary: Color::Rgb(148, 163, 184),
            text_muted: Color::Rgb(100, 116, 139),

            border: Color::Rgb(51, 65, 85),
            border_focused: Color::Rgb(59, 130, 246),
            selection: Color::Rgb(59, 130, 246),
            selection_text: Color::Rgb(15, 23, 42),

            info: Color::Rgb(56, 189, 248),
            warning: Color::Rgb(250, 204, 21),
            error: Color::Rgb(248, 113, 113),

            accent: Color::Rgb(59, 130, 246),
        };

        Self::from_palette(palette)
    }

    /// Slate light scheme.
    pub fn slate_light() -> Self {
        let palette = ColorPalette {
            background: Color::Rgb(248, 250, 252),
            foreground: Color::Rgb(15, 23, 42),
            surface: Color::Rgb(241, 245, 249),

            text_primary: Color::Rgb(15, 23, 42),
            text_secondary: Color::Rgb(71, 85, 105),
            text_muted: Color::Rgb(148, 163, 184),

            border: Color::Rgb(203, 213, 225),
            border_focused: Color::Rgb(37, 99, 235),
            selection: Color::Rgb(37, 99, 235),
            selection_text: Color::Rgb(248, 250, 252),

            info: Color::Rgb(2, 132, 199),
            warning: Color::Rgb(202, 138, 4),
            error: Color::Rgb(220, 38, 38),

            accent: Color::Rgb(37, 99, 235),
        };

        Self::from_palette(palette)
    }

    /// High contrast scheme.
    pub fn high_contrast() -> Self {
        let palette = ColorPalette {
            background: Color::Rgb(0, 0, 0),
            foreground: Color::Rgb(255, 255, 255),
            surface: Color::Rgb(0, 0, 0),

            text_primary: Color::Rgb(255, 255, 255),
            text_secondary: Color::Rgb(255, 255, 255),
            text_muted: Color::Rgb(192, 192, 192),

            border: Color::Rgb(255, 255, 255),
            border_focused: Color::Rgb(255, 255, 0),
            selection: Color::Rgb(255, 255, 255),
            selection_text: Color::Rgb(0, 0, 0),

            info: Color::Rgb(0, 255, 255),
            warning: Color::Rgb(255, 255, 0),
            error: Color::Rgb(255, 0, 0),

            accent: Color::Rgb(255, 255, 0),
        };

        Self::from_palette(palette)
    }

    fn from_palette(palette: ColorPalette) -> Self {
        Self {
            nav: NavColors {
                icon: palette.text_secondary,
                link: palette.text_secondary,
                link_active: palette.text_primary,
                badge: palette.warning,
                group_separator: palette.border,
            },
            message_list: MessageListColors {
                sender_unread: palette.text_primary,
                sender_read: palette.text_secondary,
                subject: palette.text_primary,
                preview: palette.text_muted,
                date: palette.text_muted,
                unread_indicator: palette.accent,
                label_chip: palette.info,
                tab_active: palette.accent,
                tab_inactive: palette.text_muted,
            },
            reader: ReaderColors {
                header_label: palette.accent,
                header_value: palette.text_primary,
                body: palette.text_primary,
                link: palette.info,
                empty: palette.text_muted,
            },
            status_bar: StatusBarColors {
                background: palette.surface,
                text: palette.text_primary,
                section_separator: palette.border,
            },
            palette,
        }
    }
}
