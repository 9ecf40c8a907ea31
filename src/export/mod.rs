//! Export der Schienen als strukturiertes Literal oder Konstruktions-Snippet.
//!
//! Beide Formate tragen denselben numerischen Inhalt: linke Schiene zuerst,
//! Punkte in Indexreihenfolge, jede Koordinate auf eine feste Anzahl
//! Nachkommastellen gerundet (kaufmännisch, weg von null).

use glam::Vec3;

use crate::core::RailPair;

/// Das gewählte Export-Format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Strukturiertes `{"pathArray": …}`-Literal
    Structured,
    /// Einbettbarer Konstruktionsaufruf der Host-Umgebung
    Snippet,
}

impl ExportFormat {
    /// Dateiname für den Export der benannten Fläche.
    pub fn filename(&self, surface_name: &str) -> String {
        match self {
            ExportFormat::Structured => format!("{surface_name}.json"),
            ExportFormat::Snippet => format!("{surface_name}.js"),
        }
    }
}

/// Rundet eine Koordinate weg von null und formatiert sie mit exakt
/// `decimals` Nachkommastellen.
pub fn format_coord(value: f32, decimals: u32) -> String {
    let factor = 10f64.powi(decimals as i32);
    let rounded = (f64::from(value) * factor).round() / factor;
    format!("{:.*}", decimals as usize, rounded)
}

/// Ein Punkt als `[x,y,z]`-Tupel.
fn tuple(point: Vec3, decimals: u32) -> String {
    format!(
        "[{},{},{}]",
        format_coord(point.x, decimals),
        format_coord(point.y, decimals),
        format_coord(point.z, decimals)
    )
}

/// Ein Punkt als Vektor-Konstruktor der Host-Umgebung.
fn vector_call(point: Vec3, decimals: u32) -> String {
    format!(
        "new BABYLON.Vector3({},{},{})",
        format_coord(point.x, decimals),
        format_coord(point.y, decimals),
        format_coord(point.z, decimals)
    )
}

/// Alle Punkte einer Schiene, kommagetrennt auf einer Zeile.
fn rail_line(points: &[Vec3], decimals: u32, render: fn(Vec3, u32) -> String) -> String {
    points
        .iter()
        .map(|p| render(*p, decimals))
        .collect::<Vec<_>>()
        .join(",")
}

/// Serialisiert beide Schienen als strukturiertes Literal.
///
/// Form: `{"pathArray":[[<linke Tupel>],[<rechte Tupel>]]}` mit einem
/// `[x,y,z]`-Tupel je Stützstelle; das Ergebnis ist gültiges JSON.
pub fn to_structured_text(rails: &RailPair, decimals: u32) -> String {
    let mut out = String::from("{\"pathArray\":\n[[\n");
    out.push_str(&rail_line(rails.left(), decimals, tuple));
    out.push_str("\n],[\n");
    out.push_str(&rail_line(rails.right(), decimals, tuple));
    out.push_str("\n]]}");
    out
}

/// Serialisiert beide Schienen als einbettbaren Konstruktionsaufruf.
///
/// Inhaltlich dieselben Zahlen wie `to_structured_text`, verpackt als
/// Ribbon-Konstruktion der Host-Umgebung unter dem Flächennamen.
pub fn to_snippet_text(rails: &RailPair, decimals: u32, surface_name: &str) -> String {
    let mut out = format!(
        "BABYLON.MeshBuilder.CreateRibbon( '{surface_name}', {{pathArray: \n[[\n"
    );
    out.push_str(&rail_line(rails.left(), decimals, vector_call));
    out.push_str("\n],[\n");
    out.push_str(&rail_line(rails.right(), decimals, vector_call));
    out.push_str("\n]]}, scene );");
    out
}
