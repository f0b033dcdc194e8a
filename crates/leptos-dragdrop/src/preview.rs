//! Drag Preview
//!
//! The floating image the browser shows under the pointer while dragging.

use gloo_timers::callback::Timeout;
use serde::{de, Deserialize, Deserializer};
use serde_json::{Map, Value};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{DataTransfer, HtmlElement, HtmlImageElement};

/// What the preview shows for the dragged row
#[derive(Clone, Debug, PartialEq)]
pub struct PreviewContent {
    pub image_src: String,
    pub label: String,
}

/// Builds the visual drag preview for a gesture
pub trait DragPreview {
    fn show(&self, data_transfer: &DataTransfer, content: &PreviewContent) -> Result<(), JsValue>;
}

/// Visual parameters of the DOM-built preview card
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(remote = "Self", default, deny_unknown_fields)]
pub struct PreviewStyle {
    pub width_px: u32,
    pub background: String,
    pub opacity: f32,
    pub box_shadow: String,
    pub border_radius_px: u32,
    pub padding_px: u32,
    pub image_px: u32,
    pub image_radius_px: u32,
    pub font_family: String,
    pub font_size_px: u32,
    pub font_weight: u32,
    pub line_height_px: u32,
    pub color: String,
    pub label_padding_left_px: u32,
}

impl Default for PreviewStyle {
    fn default() -> Self {
        Self {
            width_px: 200,
            background: "white".to_string(),
            opacity: 0.9,
            box_shadow: "0px 8px 16px 0px rgba(0, 0, 0, 0.5)".to_string(),
            border_radius_px: 8,
            padding_px: 10,
            image_px: 24,
            image_radius_px: 4,
            font_family: "Gelion".to_string(),
            font_size_px: 17,
            font_weight: 500,
            line_height_px: 22,
            color: "#292B36".to_string(),
            label_padding_left_px: 10,
        }
    }
}

impl<'de> Deserialize<'de> for PreviewStyle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Objects only; the derived impl also fills fields from an array by position
        let fields = Map::<String, Value>::deserialize(deserializer)?;
        PreviewStyle::deserialize(Value::Object(fields)).map_err(de::Error::custom)
    }
}

impl PreviewStyle {
    /// CSS properties of the outer card, positioned off-screen
    pub fn card_properties(&self) -> Vec<(&'static str, String)> {
        vec![
            ("width", px(self.width_px)),
            ("height", "auto".to_string()),
            ("background-color", self.background.clone()),
            ("opacity", self.opacity.to_string()),
            ("display", "flex".to_string()),
            ("flex-direction", "row".to_string()),
            ("box-shadow", self.box_shadow.clone()),
            ("border-radius", px(self.border_radius_px)),
            ("padding", px(self.padding_px)),
            ("position", "absolute".to_string()),
            ("top", "-9999px".to_string()),
            ("left", "-9999px".to_string()),
        ]
    }

    pub fn image_properties(&self) -> Vec<(&'static str, String)> {
        vec![
            ("width", px(self.image_px)),
            ("height", px(self.image_px)),
            ("border-radius", px(self.image_radius_px)),
        ]
    }

    pub fn label_properties(&self) -> Vec<(&'static str, String)> {
        vec![
            ("font-family", self.font_family.clone()),
            ("font-size", px(self.font_size_px)),
            ("font-weight", self.font_weight.to_string()),
            ("line-height", px(self.line_height_px)),
            ("text-align", "center".to_string()),
            ("color", self.color.clone()),
            ("padding-left", px(self.label_padding_left_px)),
        ]
    }
}

fn px(value: u32) -> String {
    format!("{}px", value)
}

/// Preview card built from DOM elements and registered with `setDragImage`
#[derive(Clone, Debug, Default)]
pub struct DomDragPreview {
    pub style: PreviewStyle,
}

impl DomDragPreview {
    pub fn new(style: PreviewStyle) -> Self {
        Self { style }
    }

    fn build(&self, content: &PreviewContent) -> Result<HtmlElement, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let card = document.create_element("div")?.dyn_into::<HtmlElement>()?;
        apply_properties(&card, &self.style.card_properties())?;

        let image = document.create_element("img")?.dyn_into::<HtmlImageElement>()?;
        image.set_src(&content.image_src);
        image.set_alt("Image");
        apply_properties(&image, &self.style.image_properties())?;
        card.append_child(&image)?;

        let label = document.create_element("div")?.dyn_into::<HtmlElement>()?;
        label.set_text_content(Some(&content.label));
        apply_properties(&label, &self.style.label_properties())?;
        card.append_child(&label)?;

        Ok(card)
    }
}

impl DragPreview for DomDragPreview {
    fn show(&self, data_transfer: &DataTransfer, content: &PreviewContent) -> Result<(), JsValue> {
        let card = self.build(content)?;
        let body = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .ok_or_else(|| JsValue::from_str("no document body"))?;
        body.append_child(&card)?;
        data_transfer.set_drag_image(&card, 0, 0);

        // The browser snapshots the drag image synchronously, so the card can go
        // as soon as this handler returns.
        Timeout::new(0, move || card.remove()).forget();
        Ok(())
    }
}

fn apply_properties(el: &HtmlElement, properties: &[(&'static str, String)]) -> Result<(), JsValue> {
    let style = el.style();
    for (name, value) in properties {
        style.set_property(name, value)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_is_off_screen() {
        let props = PreviewStyle::default().card_properties();
        assert!(props.contains(&("top", "-9999px".to_string())));
        assert!(props.contains(&("left", "-9999px".to_string())));
        assert!(props.contains(&("width", "200px".to_string())));
    }

    #[test]
    fn test_partial_style_keeps_defaults() {
        let style: PreviewStyle = serde_json::from_str(r#"{"width_px": 320, "color": "black"}"#).unwrap();
        assert_eq!(style.width_px, 320);
        assert_eq!(style.color, "black");
        assert_eq!(style.font_family, "Gelion");
        assert_eq!(style.image_px, 24);
    }

    #[test]
    fn test_unknown_style_field_rejected() {
        let result: Result<PreviewStyle, _> = serde_json::from_str(r#"{"widht_px": 320}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_array_style_rejected() {
        let result: Result<PreviewStyle, _> = serde_json::from_str(r#"[320, "white"]"#);
        assert!(result.is_err());
    }
}
