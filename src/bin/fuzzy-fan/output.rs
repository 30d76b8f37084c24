//! Output formatting for the CLI.

use anyhow::Result;
use fuzzy_fan::{Curve, Marker, Reading, Term};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

use crate::config::OutputFormat;

pub struct Formatter {
    format: OutputFormat,
    precision: usize,
}

impl Formatter {
    pub fn new(format: OutputFormat, precision: usize) -> Self {
        Self { format, precision }
    }

    pub fn format_reading(&self, reading: &Reading) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(reading)?),
            OutputFormat::Table => Ok(self.format_reading_table(reading)),
        }
    }

    pub fn format_curve(&self, curve: &Curve, marker: Option<&Marker>) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let labels = curve.variable().labels();
                let json = serde_json::json!({
                    "variable": curve.variable(),
                    "unit": curve.variable().unit(),
                    "labels": labels,
                    "points": curve.points(),
                    "marker": marker,
                });

                Ok(serde_json::to_string_pretty(&json)?)
            },
            OutputFormat::Table => Ok(self.format_curve_table(curve, marker)),
        }
    }

    fn format_reading_table(&self, reading: &Reading) -> String {
        let dominant = reading.dominant();
        let mut builder = Builder::default();
        builder.push_record(["Set", "Degree", ""]);

        for (term, degree) in reading.degrees.iter() {
            let flag = if term == dominant { "*" } else { "" };
            builder.push_record([
                reading.variable.label(term).to_owned(),
                self.degree(degree),
                flag.to_owned(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        format!("{reading:.precision$}\n{table}", precision = self.precision)
    }

    fn format_curve_table(&self, curve: &Curve, marker: Option<&Marker>) -> String {
        let variable = curve.variable();
        let [low, medium, high] = variable.labels();
        let x_header = format!("{} ({})", variable.name(), variable.unit());
        let mut builder = Builder::default();
        builder.push_record([x_header.as_str(), low, medium, high]);

        for point in curve {
            builder.push_record([
                point.x.to_string(),
                self.degree(point.low),
                self.degree(point.medium),
                self.degree(point.high),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        match marker {
            Some(marker) => {
                let degrees = Term::ALL
                    .map(|term| format!("{} {}", variable.label(term), self.degree(marker.degrees.get(term))))
                    .join(", ");

                format!("{table}\nmarker at {} {}: {degrees}", marker.x, variable.unit())
            },
            None => table.to_string(),
        }
    }

    fn degree(&self, degree: f64) -> String {
        format!("{degree:.precision$}", precision = self.precision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fuzzy_fan::{sample, LinguisticVariable};

    #[test]
    fn test_reading_json() {
        let formatter = Formatter::new(OutputFormat::Json, 2);
        let reading = Reading::new(LinguisticVariable::Temperature, 25.);
        let output = formatter.format_reading(&reading).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["variable"], "temperature");
        assert_eq!(value["value"], 25.);
        assert_eq!(value["degrees"]["low"], 0.5);
        assert_eq!(value["degrees"]["high"], 0.25);
    }

    #[test]
    fn test_reading_table() {
        let formatter = Formatter::new(OutputFormat::Table, 2);
        let reading = Reading::new(LinguisticVariable::FanSpeed, 60.);
        let output = formatter.format_reading(&reading).unwrap();

        assert!(output.starts_with("degrees of membership for 60 %: slow 0.60"));
        assert!(output.contains("slow"));
        assert!(output.contains("fast"));
        assert!(output.contains("0.70"));
    }

    #[test]
    fn test_curve_json() {
        let formatter = Formatter::new(OutputFormat::Json, 2);
        let curve = sample(LinguisticVariable::Humidity);
        let marker = curve.marker(62.5);
        let output = formatter.format_curve(&curve, marker.as_ref()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["variable"], "humidity");
        assert_eq!(value["points"].as_array().map(Vec::len), Some(101));
        assert_eq!(value["points"][75]["medium"], 1.);
        assert_eq!(value["marker"]["x"], 62.5);
    }

    #[test]
    fn test_curve_table() {
        let formatter = Formatter::new(OutputFormat::Table, 3);
        let curve = sample(LinguisticVariable::Temperature);
        let output = formatter.format_curve(&curve, curve.marker(25.).as_ref()).unwrap();

        assert!(output.contains("temperature (°C)"));
        assert!(output.contains("0.750"));
        assert!(output.ends_with("marker at 25 °C: low 0.500, medium 0.750, high 0.250"));
    }

    #[test]
    fn test_fan_speed_spelled_alike() {
        let curve = sample(LinguisticVariable::FanSpeed);
        let table = Formatter::new(OutputFormat::Table, 2).format_curve(&curve, None).unwrap();
        let json = Formatter::new(OutputFormat::Json, 2).format_curve(&curve, None).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert!(table.contains("fan_speed (%)"));
        assert_eq!(value["variable"], "fan_speed");
    }
}
