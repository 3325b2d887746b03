use kickshop_core::catalog::slugify;
use kickshop_core::{HomeView, ProductDetail, ShopView};

use super::{escape, layout, link, price_label, product_grid};

pub fn render_home(view: &HomeView) -> String {
    let body = format!(
        r#"<section class="hero slider" id="featured">
<h1>Uitgelicht</h1>
{featured}
</section>
<section id="popular">
<h2>Populair</h2>
{popular}
</section>"#,
        featured = product_grid(&view.featured),
        popular = product_grid(&view.popular),
    );
    layout("Home", &body)
}

pub fn render_shop(view: &ShopView) -> String {
    let body = format!(
        r#"<div class="shop">
<aside class="filters">{filters}</aside>
<section class="listing">
<h1>{label}</h1>
<p class="count">{total} producten</p>
{grid}
{pagination}
</section>
</div>"#,
        filters = facet_sidebar(view),
        label = escape(&view.gender_label),
        total = view.total_filtered,
        grid = product_grid(&view.products),
        pagination = pagination(view),
    );
    layout(&view.gender_label, &body)
}

fn facet_sidebar(view: &ShopView) -> String {
    let mut html = String::from("<h2>Merken</h2>\n<ul class=\"brands\">");
    for (brand, models) in &view.filters {
        let selected = view.selected_brand.as_deref() == Some(brand.as_str());
        html.push_str(&format!(
            r#"<li id="brand-{slug}"{class}><a href="{href}">{brand}</a><ul class="models">"#,
            slug = slugify(brand),
            class = if selected { r#" class="selected""# } else { "" },
            href = escape(&link(
                "/shop",
                &[("brand", Some(brand)), ("gender", view.gender.as_deref())]
            )),
            brand = escape(brand),
        ));
        for model in models {
            html.push_str(&format!(
                r#"<li><a href="{href}">{model}</a></li>"#,
                href = escape(&link(
                    "/shop",
                    &[
                        ("brand", Some(brand)),
                        ("model", Some(model)),
                        ("gender", view.gender.as_deref()),
                    ]
                )),
                model = escape(model),
            ));
        }
        html.push_str("</ul></li>");
    }
    html.push_str("</ul>");
    html
}

fn pagination(view: &ShopView) -> String {
    if view.total_pages <= 1 {
        return String::new();
    }

    let mut html = String::from(r#"<nav class="pagination">"#);
    for page in 1..=view.total_pages {
        let page_str = page.to_string();
        let href = match &view.query {
            Some(query) => link("/search", &[("q", Some(query)), ("page", Some(&page_str))]),
            None => link(
                "/shop",
                &[
                    ("brand", view.selected_brand.as_deref()),
                    ("model", view.selected_model.as_deref()),
                    ("gender", view.gender.as_deref()),
                    ("page", Some(&page_str)),
                ],
            ),
        };
        if page == view.current_page {
            html.push_str(&format!(r#"<span class="current">{}</span>"#, page));
        } else {
            html.push_str(&format!(r#"<a href="{}">{}</a>"#, escape(&href), page));
        }
    }
    html.push_str("</nav>");
    html
}

pub fn render_product(detail: &ProductDetail) -> String {
    let product = &detail.product;
    let name = product.name.as_deref().unwrap_or("");
    let sizes = product
        .extra
        .get("sizes")
        .and_then(|sizes| sizes.as_array())
        .map(|sizes| {
            sizes
                .iter()
                .map(|size| {
                    let size = size.to_string();
                    let size = size.trim_matches('"');
                    format!(
                        r#"<button type="button" class="size" data-size="{0}">{0}</button>"#,
                        escape(size)
                    )
                })
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();
    let image = product
        .extra_str("image")
        .map(|src| format!(r#"<img src="{}" alt="{}">"#, escape(src), escape(name)))
        .unwrap_or_default();

    let body = format!(
        r#"<article class="product-detail" data-id="{id}">
{image}
<h1>{name}</h1>
<p class="brand">{brand} {model}</p>
<p class="price">{price}</p>
<p class="description">{description}</p>
<div class="sizes">{sizes}</div>
<button type="button" id="add-to-cart">In winkelwagen</button>
</article>
<section id="variants">
<h2>Andere kleuren</h2>
{variants}
</section>
<section id="related" class="slider">
<h2>Meer van {brand}</h2>
{related}
</section>"#,
        id = escape(product.id.as_deref().unwrap_or("")),
        image = image,
        name = escape(name),
        brand = escape(product.brand.as_deref().unwrap_or("")),
        model = escape(product.model.as_deref().unwrap_or("")),
        price = price_label(product),
        description = escape(product.extra_str("description").unwrap_or("")),
        sizes = sizes,
        variants = product_grid(&detail.variants),
        related = product_grid(&detail.related),
    );
    layout(name, &body)
}

pub fn render_about() -> String {
    layout(
        "Over ons",
        r#"<section class="about">
<h1>Over ons</h1>
<p>Kickshop verkoopt sneakers van de grote merken, voor heren en dames.</p>
</section>"#,
    )
}

pub fn render_contact() -> String {
    layout(
        "Contact",
        r#"<section class="contact">
<h1>Contact</h1>
<form id="contact-form">
<label>Naam <input type="text" name="name" required></label>
<label>E-mail <input type="email" name="email" required></label>
<label>Bericht <textarea name="message" required></textarea></label>
<button type="submit">Versturen</button>
</form>
</section>"#,
    )
}

pub fn render_not_found() -> String {
    layout(
        "Niet gevonden",
        r#"<section class="not-found">
<h1>Product niet gevonden</h1>
<p><a href="/shop">Terug naar de shop</a></p>
</section>"#,
    )
}
