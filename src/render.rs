use crate::grid::Grid;

const TD_DEAD: &str = "<td></td>";
const TD_ALIVE: &str = "<td style=\"background-color: black;\"></td>";

/// Render `grid` as an HTML table, one `<tr>` per row and one `<td>` per cell. Live cells get a
/// black background, dead cells are left empty.
pub fn render_table(grid: &Grid) -> String {
    let cap = "<table></table>".len()
        + grid.height() * ("<tr></tr>".len() + grid.width() * TD_ALIVE.len());
    let mut html = String::with_capacity(cap);

    html.push_str("<table>");

    for row in grid.rows() {
        html.push_str("<tr>");

        for &alive in row {
            html.push_str(if alive { TD_ALIVE } else { TD_DEAD });
        }

        html.push_str("</tr>");
    }

    html.push_str("</table>");

    html
}
