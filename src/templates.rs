use maud::{html, Markup, DOCTYPE};

/// Small landing page so a browser hitting the service root sees what it
/// talks to instead of a 404.
pub fn home_page() -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "Property Feed Transformer" }
            }
            body {
                h1 { "Property Feed Transformer" }
                p {
                    "POST a property payload to " code { "/transform" }
                    " to get the flattened records back as JSON."
                }
                p {
                    "POST the same payload to " code { "/transform/xlsx" }
                    " to download them as a spreadsheet."
                }
                p {
                    "Accepted bodies: a bare record list, a "
                    code { "results.properties" } " wrapper (plain or inside a"
                    " one-element list), or an " code { "IMTBuffer" }
                    " hex string."
                }
            }
        }
    }
}
