//! Test fixtures for the propellant parser


/// A propellant element with the usual attributes
pub fn propellant_xml(name: &str, isp: &str, a: &str, n: &str, density: &str, gamma: &str) -> String {
    format!(
        r#"<Propellant Name="{}" ISPStar="{}" A="{}" N="{}" Density="{}" SpecificHeatRatio="{}"/>"#,
        name, isp, a, n, density, gamma
    )
}

/// Two well-formed propellants under a single root
pub fn create_propellant_library() -> String {
    r#"<?xml version="1.0"?>
<BurnSimPropellants>
  <Propellant Name="KNDX" ISPStar="150" A="0.0665" N="0.319" Density="1.77" SpecificHeatRatio="1.1308">
    <Notes>  Potassium nitrate / dextrose  </Notes>
  </Propellant>
  <Propellant Name="White Lightning" ISPStar="190" A="0.041" N="0.35" Density="1.65" SpecificHeatRatio="1.21"/>
</BurnSimPropellants>"#
        .to_string()
}
