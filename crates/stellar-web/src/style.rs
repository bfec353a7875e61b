// CSS for the star element. Kept free of web-sys so it can be tested on the host.
use stellar_core::StarAppearance;

#[derive(Clone, Debug, PartialEq)]
pub struct StarStyle {
    pub width: String,
    pub height: String,
    pub background: String,
    pub box_shadow: String,
}

impl StarStyle {
    pub fn from_appearance(look: &StarAppearance) -> Self {
        let size = px(look.px_size);
        Self {
            width: size.clone(),
            height: size,
            background: format!(
                "radial-gradient(circle at 35% 35%, {}, {})",
                look.color_stops[0], look.color_stops[1]
            ),
            box_shadow: format!("0 0 {} {}", px(look.glow_radius), look.glow_color),
        }
    }

    pub fn properties(&self) -> [(&'static str, &str); 4] {
        [
            ("width", self.width.as_str()),
            ("height", self.height.as_str()),
            ("background", self.background.as_str()),
            ("box-shadow", self.box_shadow.as_str()),
        ]
    }
}

#[inline]
fn px(v: f32) -> String {
    format!("{:.1}px", v)
}
