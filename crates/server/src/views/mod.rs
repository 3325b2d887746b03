//! Server-side HTML views.
//!
//! Views receive fully prepared data from the storefront and only turn it
//! into markup. Client scripts (cart, menus, sliders) live in the static
//! directory and hook into the element ids used here.

mod pages;

pub use pages::{render_about, render_contact, render_home, render_not_found, render_product, render_shop};

use kickshop_core::Product;

/// Escape text for use in HTML content and attribute values.
pub fn escape(text: &str) -> String {
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

/// Build `path?key=value&...`, skipping empty values.
pub fn link(path: &str, params: &[(&str, Option<&str>)]) -> String {
    let query: Vec<String> = params
        .iter()
        .filter_map(|(key, value)| {
            (*value)
                .filter(|v| !v.is_empty())
                .map(|v| format!("{}={}", key, urlencoding::encode(v)))
        })
        .collect();
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query.join("&"))
    }
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="nl">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | Kickshop</title>
<link rel="stylesheet" href="/css/style.css">
</head>
<body>
<header class="site-header">
<a class="logo" href="/">Kickshop</a>
<nav id="menu">
<a href="/shop">Shop</a>
<a href="/shop?gender=heren">Heren</a>
<a href="/shop?gender=dames">Dames</a>
<a href="/about">Over ons</a>
<a href="/contact">Contact</a>
</nav>
<form class="search" action="/search" method="get">
<input type="search" name="q" id="search-input" placeholder="Zoeken" autocomplete="off">
<div id="search-suggestions"></div>
</form>
<button id="cart-toggle" type="button">Winkelwagen (<span id="cart-count">0</span>)</button>
</header>
<aside id="cart" hidden></aside>
<main>
{body}
</main>
<script src="/js/script.js"></script>
</body>
</html>
"#,
        title = escape(title),
        body = body,
    )
}

fn product_card(product: &Product) -> String {
    let id = product.id.as_deref().unwrap_or("");
    let name = product.name.as_deref().unwrap_or("");
    let brand = product.brand.as_deref().unwrap_or("");
    let image = product
        .extra_str("image")
        .map(|src| format!(r#"<img src="{}" alt="{}">"#, escape(src), escape(name)))
        .unwrap_or_default();

    format!(
        r#"<article class="product-card" data-id="{id}">
<a href="/product/{href}">{image}<h3>{name}</h3></a>
<p class="brand">{brand}</p>
<p class="price">{price}</p>
</article>"#,
        id = escape(id),
        href = urlencoding::encode(id),
        image = image,
        name = escape(name),
        brand = escape(brand),
        price = price_label(product),
    )
}

fn product_grid(products: &[Product]) -> String {
    if products.is_empty() {
        return r#"<p class="empty">Geen producten gevonden.</p>"#.to_string();
    }
    let cards: Vec<String> = products.iter().map(product_card).collect();
    format!(r#"<div class="product-grid">{}</div>"#, cards.join("\n"))
}

fn price_label(product: &Product) -> String {
    product
        .price
        .as_ref()
        .map(|price| format!("€ {}", price))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_link_encodes_and_skips_empty() {
        assert_eq!(link("/shop", &[]), "/shop");
        assert_eq!(
            link(
                "/shop",
                &[("brand", Some("new balance")), ("model", None), ("page", Some("2"))]
            ),
            "/shop?brand=new%20balance&page=2"
        );
        assert_eq!(link("/search", &[("q", Some(""))]), "/search");
    }

    #[test]
    fn test_product_card_escapes_fields() {
        let product = Product::from_value(json!({
            "id": "a b",
            "name": "<script>",
            "price": 99.5,
            "image": "/img/a.png"
        }))
        .unwrap();

        let html = product_card(&product);

        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains(r#"href="/product/a%20b""#));
        assert!(html.contains("€ 99.5"));
        assert!(html.contains(r#"<img src="/img/a.png""#));
    }
}
