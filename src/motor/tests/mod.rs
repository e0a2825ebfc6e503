//! Test fixtures for the motor parser

mod parser_tests;

/// A two-grain motor export as BurnSim writes it
pub fn create_test_motor() -> String {
    r#"<?xml version="1.0" encoding="UTF-8"?>
<Motor Name="H128 Blue" DiameterMM="29" Length="194" Delays="6,10,14" HardwareWeight="0.12" MFGCode="AT" ThrustMethod="1" ThrustCoefGiven="1.5" UnitsLinear="1">
  <Nozzle ThroatDia="0.25" ExitDia="0.62" AmbientPressure="14.7" NozzleEfficiency="0.85"/>
  <Grain Type="1" Propellant="Blue Thunder" Diameter="1.1" Length="2.25" CoreDiameter="0.375" EndsInhibited="0">
    <Propellant Name="Blue Thunder" Density="0.0614" ISPStar="4800" BallisticA="0.0665" BallisticN="0.319" SpecificHeatRatio="1.1308" MolarMass="24.1" CombustionTemp="2800">
      <Notes>Fast burning</Notes>
    </Propellant>
  </Grain>
  <Grain Type="1" Propellant="Blue Thunder" Diameter="1.1" Length="2.25" CoreDiameter="0.375" EndsInhibited="0"/>
  <MotorNotes>Designed for the 2024 season</MotorNotes>
</Motor>"#
        .to_string()
}

/// Same motor with the name attribute removed
pub fn create_unnamed_motor() -> String {
    create_test_motor().replace(r#"Name="H128 Blue" "#, "")
}
