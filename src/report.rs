use crate::approach::Approach;

pub fn result_line(approach: Approach, value: u64) -> String {
    format!("{}: {value}", approach.label())
}

pub fn complexity_table() -> String {
    let header = ["Approach", "Time", "Space", "Efficiency"];
    let rows: Vec<[&str; 4]> = Approach::ALL
        .iter()
        .map(|a| {
            [
                a.label(),
                a.time_complexity(),
                a.space_complexity(),
                a.efficiency(),
            ]
        })
        .collect();

    let mut widths = header.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let render = |cells: &[&str; 4]| {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!(" {cell:<width$} "))
            .collect();
        format!("|{}|", padded.join("|"))
    };
    let rule = format!(
        "|{}|",
        widths
            .iter()
            .map(|w| "-".repeat(w + 2))
            .collect::<Vec<_>>()
            .join("|")
    );

    let mut lines = vec![render(&header), rule];
    lines.extend(rows.iter().map(render));
    lines.join("\n")
}
