//! Client-side CSV template generation. No network involved.

/// Header row the service's CSV parser expects.
pub const TEMPLATE_HEADER: &str =
    "id,title,description,price,category,brand,currency,sku,color,size,material";

const EXAMPLE_ROW: &str = "P-1001,Insulated Trail Bottle,Keeps drinks cold for 24 hours on the trail,24.99,Outdoor Gear,Summit Co,USD,SC-TB-32,Forest Green,32oz,Stainless Steel";

/// Returns the full CSV template: the fixed header plus one example row.
#[must_use]
pub fn csv_template() -> String {
    format!("{TEMPLATE_HEADER}\n{EXAMPLE_ROW}\n")
}
