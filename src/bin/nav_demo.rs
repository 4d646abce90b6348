//! Page behaviors demo - drives a landing page built in the in-memory DOM
//!
//! Run with `RUST_LOG=debug` to see every handled event.

use page_nav::prelude::*;

fn build_page(doc: &MemoryDocument) -> MemoryElement {
    //   <button id="menu-toggle">
    //   <nav id="navbar"><ul>
    //     <a href="#about"> <a href="#workflow"> <a href="#contact">
    //   </ul></nav>
    //   <section id="about">   <section id="workflow">
    doc.append(&doc.create_element("button").with_id("menu-toggle"));

    let nav = doc.create_element("nav").with_id("navbar");
    let list = doc.create_element("ul");
    for target in ["#about", "#workflow", "#contact"] {
        let item = doc.create_element("li");
        item.append_child(&doc.create_element("a").with_attribute("href", target));
        list.append_child(&item);
    }
    nav.append_child(&list);
    doc.append(&nav);

    doc.append(&doc.create_element("section").with_id("about"));
    let workflow = doc.create_element("section").with_id("workflow");
    workflow.set_viewport_top(1200.0);
    doc.append(&workflow);
    workflow
}

fn main() -> Result<(), NavError> {
    page_nav::logging::init();

    println!("=== Page Behaviors Demo ===\n");

    let doc = MemoryDocument::new(650.0);
    let workflow = build_page(&doc);
    let page = PageBehaviors::bind(doc.clone(), &PageConfig::default())?;
    println!("Bound {} internal link(s)", page.links().len());

    // Menu
    for _ in 0..3 {
        let open = page.on_toggle_click()?;
        println!("Toggle clicked: menu {}", if open { "open" } else { "closed" });
    }

    // Links; #contact has no matching section
    for index in 0..page.links().len() {
        let event = MemoryEvent::click();
        let outcome = page.on_link_click(index, &event)?;
        println!(
            "Link #{} -> {:?} (default prevented: {}, menu open: {})",
            outcome.fragment(),
            outcome,
            event.default_prevented(),
            page.menu().is_open()
        );
    }
    println!("Smooth scroll requests: {}", doc.scroll_requests().len());

    // Scroll the workflow section up through the threshold
    let threshold = reveal_threshold(650.0, PageConfig::default().reveal_divisor);
    println!("\nReveal threshold: {:.1}px", threshold);
    for top in [1200.0, 800.0, 520.0, 480.0, 900.0] {
        workflow.set_viewport_top(top);
        println!("  top = {:>6.1}: {:?}", top, page.on_scroll()?);
    }

    Ok(())
}
