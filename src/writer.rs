use txm::{CommandReport, Result};

use csv::Writer;

/// Serializes reports into a CSV string, header first
pub fn write_reports(reports: &[CommandReport]) -> Result<String> {
    let mut wtr = Writer::from_writer(vec![]);

    for report in reports.iter() {
        log::debug!("Serializing report: {report:?}");
        wtr.serialize(report)?;
    }

    let utf8 = wtr.into_inner()?;
    let string = String::from_utf8(utf8)?;
    return Ok(string);
}
