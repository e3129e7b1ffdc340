use eframe::egui::{
    self,
    style::{
        Selection,
        WidgetVisuals,
        Widgets,
    },
    Color32,
    RichText,
    Stroke,
    Visuals,
};

#[derive(Clone)]
pub struct Theme {
    background: Color32,
    background_dark: Color32,
    background_light: Color32,
    foreground: Color32,
    selection: Color32,
    accent: Color32,
    highlight: Color32,
    red: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dracula()
    }
}

impl Theme {
    //Colors from:
    //https://github.com/ShabbirHasan1/egui_dracula/blob/master/src/lib.rs
    pub fn dracula() -> Self {
        Self {
            background: Color32::from_rgb(0x28, 0x2a, 0x36),
            background_dark: Color32::from_rgb(33, 35, 53),
            background_light: Color32::from_rgb(52, 54, 66),
            foreground: Color32::from_rgb(0xf8, 0xf8, 0xf2),
            selection: Color32::from_rgb(0x44, 0x47, 0x5a),
            accent: Color32::from_rgb(189, 147, 249),
            highlight: Color32::from_rgb(0xff, 0xb8, 0x6c),
            red: Color32::from_rgb(0xff, 0x55, 0x55),
        }
    }

    pub fn heading(&self, content: &str) -> RichText {
        RichText::new(content).color(self.accent)
    }

    pub fn bold(&self, content: &str) -> RichText {
        RichText::new(content).color(self.highlight).strong()
    }

    pub fn red(&self) -> Color32 {
        self.red
    }
}

pub fn set_theme(ctx: &egui::Context, theme: &Theme) {
    let default = Visuals::dark();

    ctx.set_visuals(Visuals {
        dark_mode: true,
        widgets: Widgets {
            noninteractive: WidgetVisuals {
                bg_fill: theme.background,
                fg_stroke: Stroke {
                    color: theme.foreground,
                    ..default.widgets.noninteractive.fg_stroke
                },
                ..default.widgets.noninteractive
            },
            inactive: WidgetVisuals {
                bg_fill: theme.background_light,
                weak_bg_fill: theme.background_light,
                fg_stroke: Stroke {
                    color: theme.foreground,
                    ..default.widgets.inactive.fg_stroke
                },
                ..default.widgets.inactive
            },
            hovered: WidgetVisuals {
                bg_fill: theme.selection,
                weak_bg_fill: theme.selection,
                bg_stroke: Stroke { color: theme.accent, ..default.widgets.hovered.bg_stroke },
                ..default.widgets.hovered
            },
            active: WidgetVisuals {
                bg_fill: theme.selection,
                bg_stroke: Stroke { color: theme.accent, ..default.widgets.active.bg_stroke },
                ..default.widgets.active
            },
            open: WidgetVisuals { bg_fill: theme.background_dark, ..default.widgets.open },
        },
        selection: Selection {
            bg_fill: theme.selection,
            stroke: Stroke { color: theme.foreground, ..default.selection.stroke },
        },
        error_fg_color: theme.red,
        extreme_bg_color: theme.background_dark,
        window_fill: theme.background,
        panel_fill: theme.background,
        faint_bg_color: theme.background_dark,
        ..default
    });
}
