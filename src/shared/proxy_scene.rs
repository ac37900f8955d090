//! Vertrag zur Szene: Proxys hinzufügen, umstylen und entfernen.
//!
//! Die Registry kennt den Renderer nicht; sie meldet Änderungen über
//! [`ProxyScene`]. Styles werden als geteilte Definitionen übergeben, damit der
//! Renderer pro Style genau ein Material halten kann.

use super::options::SelectionOptions;
use crate::core::{BoundingVolume, EntityId, VolumeStyle};
use std::sync::Arc;

/// Geteilte visuelle Definition eines Proxy-Styles.
#[derive(Debug, Clone, PartialEq)]
pub struct ProxyStyle {
    /// RGBA-Farbe inkl. Deckkraft
    pub color: [f32; 4],
    /// Ob der Proxy in den Tiefenpuffer schreibt (Highlights nicht)
    pub depth_write: bool,
}

/// Die drei wiederverwendeten Style-Definitionen.
#[derive(Debug, Clone)]
pub struct StyleSet {
    default: Arc<ProxyStyle>,
    hovered: Arc<ProxyStyle>,
    selected: Arc<ProxyStyle>,
}

impl StyleSet {
    /// Baut die Styles aus den Optionen.
    pub fn from_options(options: &SelectionOptions) -> Self {
        let translucent = |color: [f32; 4]| {
            Arc::new(ProxyStyle {
                color,
                depth_write: false,
            })
        };
        Self {
            default: translucent(options.style_default_color),
            hovered: translucent(options.style_hovered_color),
            selected: translucent(options.style_selected_color),
        }
    }

    /// Liefert die geteilte Definition zu einem Style.
    pub fn get(&self, style: VolumeStyle) -> &Arc<ProxyStyle> {
        match style {
            VolumeStyle::Default => &self.default,
            VolumeStyle::Hovered => &self.hovered,
            VolumeStyle::Selected => &self.selected,
        }
    }
}

impl Default for StyleSet {
    fn default() -> Self {
        Self::from_options(&SelectionOptions::default())
    }
}

/// Vom Host bereitgestellte Szene für die Proxy-Darstellung.
pub trait ProxyScene {
    /// Proxy wurde registriert (unsichtbar, Default-Style).
    fn add_proxy(&mut self, volume: &BoundingVolume, style: &Arc<ProxyStyle>);
    /// Style oder Sichtbarkeit eines Proxys haben sich geändert.
    fn update_proxy(&mut self, volume: &BoundingVolume, style: &Arc<ProxyStyle>);
    /// Proxy wurde entfernt; zugehörige Grafik-Ressourcen freigeben.
    fn remove_proxy(&mut self, entity_id: &EntityId);
}

/// Szene ohne Darstellung (headless).
#[derive(Debug, Default)]
pub struct DetachedScene;

impl ProxyScene for DetachedScene {
    fn add_proxy(&mut self, _volume: &BoundingVolume, _style: &Arc<ProxyStyle>) {}

    fn update_proxy(&mut self, _volume: &BoundingVolume, _style: &Arc<ProxyStyle>) {}

    fn remove_proxy(&mut self, _entity_id: &EntityId) {}
}
