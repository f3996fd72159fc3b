//! Configuration header rendering
//!
//! Emits the C header a guest build consumes: the `FAILED` and `RIGHT`
//! defines followed by the backing array.
//!
//! ```text
//! #define FAILED 4
//! #define RIGHT 3
//!
//! unsigned long long array[4] = {
//!     0ULL, 1ULL, 2ULL, 3ULL,
//! };
//! ```

use crate::SearchImage;

/// Values per line in the array initializer
const VALUES_PER_LINE: usize = 8;

/// Render the configuration header for an image
pub fn render_header(image: &SearchImage) -> String {
    let values = image.table().as_slice();
    let mut out = String::new();

    out.push_str(&format!("#define FAILED {}\n", image.failed()));
    out.push_str(&format!("#define RIGHT {}\n", image.right()));
    out.push('\n');
    out.push_str(&format!("unsigned long long array[{}] = {{\n", values.len()));

    for line in values.chunks(VALUES_PER_LINE) {
        out.push_str("    ");
        let row: Vec<String> = line.iter().map(|v| format!("{}ULL,", v)).collect();
        out.push_str(&row.join(" "));
        out.push('\n');
    }

    out.push_str("};\n");
    out
}
