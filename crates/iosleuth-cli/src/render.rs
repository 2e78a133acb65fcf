/// Report renderers. Each writes a finished [`Report`] to any `Write`.
use iosleuth_core::model::size::{group_thousands, ByteSize};
use iosleuth_core::report::{FileListing, Report};
use std::io::{self, Write};

// ── Text ─────────────────────────────────────────────────────────────────────

/// Human-readable tables.
pub fn write_text<W: Write>(report: &Report, out: &mut W) -> io::Result<()> {
    let width = report.name_width();

    for row in &report.categories {
        writeln!(
            out,
            "{:<width$}  {:>15}  {:>10}  {:>5.1}%",
            row.name,
            group_thousands(row.written),
            ByteSize(row.written).to_string(),
            row.percent,
        )?;
    }
    writeln!(
        out,
        "{:<width$}  {:>15}  {:>10}",
        "Total",
        group_thousands(report.total.written),
        ByteSize(report.total.written).to_string(),
    )?;
    writeln!(
        out,
        "{:<width$}  {:>15}  {:>10}",
        "(read)",
        group_thousands(report.total.read),
        ByteSize(report.total.read).to_string(),
    )?;

    writeln!(out)?;
    match (&report.session, &report.rate) {
        (Some(span), Some(rate)) => {
            writeln!(
                out,
                "Session {} to {} ({:.1} s)",
                span.first.format("%H:%M:%S"),
                span.last.format("%H:%M:%S"),
                report.duration_secs
            )?;
            writeln!(
                out,
                "Write rate: {:.1} bytes/s, {:.3} GB/day",
                rate.write_bytes_per_sec, rate.write_gib_per_day
            )?;
            writeln!(
                out,
                "Read rate:  {:.1} bytes/s, {:.3} GB/day",
                rate.read_bytes_per_sec, rate.read_gib_per_day
            )?;
        }
        _ => writeln!(out, "Session too short to estimate a rate")?,
    }

    if !report.origins.is_empty() {
        writeln!(out)?;
        writeln!(out, "IndexedDB origins:")?;
        let origin_width = report
            .origins
            .iter()
            .map(|o| o.origin.len())
            .max()
            .unwrap_or(0);
        for row in &report.origins {
            writeln!(
                out,
                "  {:<origin_width$}  {:>15}  {:>10}",
                row.origin,
                group_thousands(row.written),
                ByteSize(row.written).to_string(),
            )?;
        }
    }

    if let Some(listing) = &report.files {
        writeln!(out)?;
        files_text(listing, out)?;
    }
    Ok(())
}

fn files_text<W: Write>(listing: &FileListing, out: &mut W) -> io::Result<()> {
    writeln!(out, "Files in {}:", listing.name)?;
    for file in &listing.files {
        writeln!(
            out,
            "  {:>15}  {:>15}  {}",
            group_thousands(file.written),
            group_thousands(file.read),
            file.path
        )?;
    }
    writeln!(
        out,
        "  {:>15}  {:>15}  total of {} files",
        group_thousands(listing.total.written),
        group_thousands(listing.total.read),
        listing.files.len()
    )
}

// ── CSV ──────────────────────────────────────────────────────────────────────

/// `category,written,read`, one row per non-empty category, then Total.
/// With a file listing, a second table `path,written,read` follows.
pub fn write_csv<W: Write>(report: &Report, out: W) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record(["category", "written", "read"])?;
    for row in &report.categories {
        wtr.serialize((row.name, row.written, row.read))?;
    }
    wtr.serialize(("Total", report.total.written, report.total.read))?;

    if let Some(listing) = &report.files {
        wtr.write_record(["path", "written", "read"])?;
        for file in &listing.files {
            wtr.serialize((&file.path, file.written, file.read))?;
        }
    }
    wtr.flush()?;
    Ok(())
}

// ── JSON ─────────────────────────────────────────────────────────────────────

/// The whole report model, pretty-printed.
pub fn write_json<W: Write>(report: &Report, mut out: W) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(&mut out, report)?;
    writeln!(out).map_err(serde_json::Error::io)
}
