use async_trait::async_trait;

use crate::dashboard::{PanelRenderer, RenderError};
use crate::models::panel::PanelSpec;

/// Renderer that writes each panel spec as one JSON line to stdout.
///
/// The embedding chart surface (or a pipe consumer) takes it from there;
/// this binary never paints pixels.
pub struct JsonLineRenderer;

#[async_trait]
impl PanelRenderer for JsonLineRenderer {
    async fn render(&self, spec: PanelSpec) -> Result<(), RenderError> {
        let line = serde_json::to_string(&spec).map_err(|e| RenderError::new(e.to_string()))?;
        println!("{line}");
        Ok(())
    }
}
