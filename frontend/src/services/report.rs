use shared::{month_name, OverviewData, Shift, UnpaidRow};

/// Inline stylesheet for generated reports: self-contained, scrollable in
/// both axes, sticky header row and sticky name column.
const REPORT_CSS: &str = "\
      body { font-family: Arial, sans-serif; margin: 16px; }\n\
      .wrap { overflow:auto; max-height:90vh; border:1px solid #ccc; }\n\
      table { border-collapse: collapse; font-size: 13px; width: max-content; }\n\
      th, td { border:1px solid #ccc; padding:6px 10px; white-space:nowrap; text-align:center; }\n\
      th { background:#e8f5e9; position:sticky; top:0; }\n\
      .name { position:sticky; left:0; background:#fafafa; font-weight:600; }";

pub fn overview_filename(shift: Shift, year: i32, month: u32) -> String {
    format!("Overview_{}_{}_{:02}.html", shift, year, month)
}

pub fn unpaid_filename(shift: Shift, date: &str) -> String {
    format!("Unpaid_{}_{}.html", shift, date)
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn document(title: &str, heading: &str, table: &str, generated_at: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
<html lang=\"en\">\n\
<head>\n\
  <meta charset=\"UTF-8\" />\n\
  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\" />\n\
  <title>{title}</title>\n\
  <style>\n{css}\n  </style>\n\
</head>\n\
<body>\n\
  <h3>{heading}</h3>\n\
  <div class=\"wrap\">\n{table}\n  </div>\n\
  <p>Generated on {generated_at}</p>\n\
</body>\n\
</html>\n",
        title = title,
        heading = heading,
        css = REPORT_CSS,
        table = table,
        generated_at = generated_at,
    )
}

/// Standalone month-overview document: one row per customer, one column per
/// day, litre and amount totals at the end.
pub fn overview_report(
    shift: Shift,
    month: u32,
    year: i32,
    data: &OverviewData,
    generated_at: &str,
) -> String {
    let mut table = String::from("    <table>\n      <tr>\n        <th class=\"name\">Customer</th>\n");
    for day in data.day_numbers() {
        table.push_str(&format!("        <th>{}</th>\n", day));
    }
    table.push_str("        <th>Total Litres</th>\n        <th>Total Amount</th>\n      </tr>\n");

    for customer in &data.customers {
        table.push_str("      <tr>\n");
        table.push_str(&format!(
            "        <td class=\"name\">{}</td>\n",
            escape_html(customer.display_name())
        ));
        for day in data.day_numbers() {
            let litres = data.litres_at(day, customer.id);
            if litres > 0.0 {
                table.push_str(&format!("        <td>{:.2} L</td>\n", litres));
            } else {
                table.push_str("        <td>-</td>\n");
            }
        }
        table.push_str(&format!(
            "        <td><b>{:.2}</b></td>\n",
            data.total_litres(customer.id)
        ));
        table.push_str(&format!(
            "        <td><b>₹{:.2}</b></td>\n",
            data.total_amount(customer.id)
        ));
        table.push_str("      </tr>\n");
    }
    table.push_str("    </table>");

    let heading = format!("Overview — {} | {} {}", shift, month_name(month), year);
    document("Overview", &heading, &table, generated_at)
}

/// Standalone unpaid-customers document, one row per outstanding customer.
pub fn unpaid_report(shift: Shift, rows: &[UnpaidRow], date: &str, generated_at: &str) -> String {
    let mut table = String::from(
        "    <table>\n      <tr>\n        <th class=\"name\">Name</th>\n        <th>Litres</th>\n        <th>Rate</th>\n        <th>Total</th>\n      </tr>\n",
    );
    for row in rows {
        table.push_str("      <tr>\n");
        table.push_str(&format!(
            "        <td class=\"name\">{}</td>\n",
            escape_html(&row.customer_name)
        ));
        table.push_str(&format!("        <td>{:.2}</td>\n", row.litres));
        table.push_str(&format!("        <td>{:.2}</td>\n", row.rate));
        table.push_str(&format!("        <td><b>₹{:.2}</b></td>\n", row.total));
        table.push_str("      </tr>\n");
    }
    table.push_str("    </table>");

    let heading = format!("Unpaid Customers — {} | {}", shift, date);
    document("Unpaid Customers", &heading, &table, generated_at)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Customer;

    fn sample_overview() -> OverviewData {
        serde_json::from_str(
            r#"{
                "year": 2025,
                "month": 6,
                "daysInMonth": 30,
                "customers": [
                    {"id": 1, "fullName": "Ravi", "shift": "Morning", "pricePerLitre": 50.0}
                ],
                "matrix": {"3": {"1": {"litres": 2.0}}},
                "totalLitresPerCustomer": {"1": 2.0},
                "totalAmountPerCustomer": {"1": 100.0}
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn overview_report_has_one_column_per_day() {
        let html = overview_report(Shift::Morning, 6, 2025, &sample_overview(), "today");
        let day_headers = html.matches("<th>").count();
        // 30 day columns plus the two totals columns
        assert_eq!(day_headers, 32);
        assert!(html.contains("<th class=\"name\">Customer</th>"));
        assert!(html.contains("2.00 L"));
        assert!(html.contains("₹100.00"));
        assert!(html.contains("Overview — Morning | June 2025"));
        assert!(html.contains("Generated on today"));
    }

    #[test]
    fn overview_report_renders_headers_with_no_customers() {
        let data: OverviewData = serde_json::from_str(r#"{"daysInMonth": 30}"#).unwrap();
        let html = overview_report(Shift::Night, 6, 2025, &data, "today");
        assert_eq!(html.matches("<th>").count(), 32);
        assert_eq!(html.matches("<td").count(), 0);
    }

    #[test]
    fn customer_names_are_escaped() {
        let mut data = sample_overview();
        data.customers = vec![Customer {
            id: 1,
            full_name: "<script>alert(1)</script>".to_string(),
            nickname: None,
            price_per_litre: None,
            shift: Shift::Morning,
        }];
        let html = overview_report(Shift::Morning, 6, 2025, &data, "today");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn unpaid_report_lists_each_row() {
        let rows = vec![
            UnpaidRow {
                customer_id: Some(1),
                customer_name: "Ravi".to_string(),
                litres: 12.5,
                rate: 50.0,
                total: 625.0,
            },
            UnpaidRow {
                customer_id: None,
                customer_name: "Meena".to_string(),
                litres: 4.0,
                rate: 45.0,
                total: 180.0,
            },
        ];
        let html = unpaid_report(Shift::Morning, &rows, "2025-06-19", "today");
        assert!(html.contains("Unpaid Customers — Morning | 2025-06-19"));
        assert!(html.contains("Ravi"));
        assert!(html.contains("Meena"));
        assert!(html.contains("₹625.00"));
        assert_eq!(html.matches("<tr>").count(), 3);
    }

    #[test]
    fn filenames_follow_the_export_convention() {
        assert_eq!(
            overview_filename(Shift::Morning, 2025, 6),
            "Overview_Morning_2025_06.html"
        );
        assert_eq!(
            unpaid_filename(Shift::Night, "2025-06-19"),
            "Unpaid_Night_2025-06-19.html"
        );
    }
}
