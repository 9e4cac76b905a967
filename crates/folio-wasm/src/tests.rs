// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Browser tests for the mounted page controller.

use folio_app_core::carousel::Breakpoints;
use js_sys::{Function, Object, Promise};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlButtonElement, HtmlElement, HtmlInputElement, Navigator};

use super::*;

wasm_bindgen_test_configure!(run_in_browser);

/// Inserts markup into `<body>` and removes it again on drop.
struct Fixture {
    root: Element,
}

impl Fixture {
    fn new(html: &str) -> Self {
        let document = dom::document().expect("document");
        let root = document.create_element("div").expect("div");
        root.set_inner_html(html);
        document
            .body()
            .expect("body")
            .append_child(&root)
            .expect("append");
        Self { root }
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        self.root.remove();
    }
}

/// Mount a fresh app, clearing any instance the module published on start.
fn mount(settings_json: Option<&str>) -> PortfolioApp {
    let window = dom::window().expect("window");
    Reflect::delete_property(&window, &GLOBAL_NAME.into()).expect("clear global");
    PortfolioApp::new(settings_json.map(str::to_owned)).expect("mount")
}

/// Resolve after `ms` milliseconds of browser time.
async fn sleep(ms: i32) {
    let promise = Promise::new(&mut |resolve, _reject| {
        dom::window()
            .expect("window")
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .expect("setTimeout");
    });
    JsFuture::from(promise).await.expect("timer");
}

fn toasts_with_text(class: &str, text: &str) -> usize {
    dom::query_all(&dom::document().expect("document"), &format!(".{class}"))
        .iter()
        .filter(|t| t.text_content().as_deref() == Some(text))
        .count()
}

/// Shadow `navigator.clipboard` with an object whose `writeText` runs `body`.
fn stub_clipboard(body: &str) -> Navigator {
    let navigator = dom::window().expect("window").navigator();
    let stub = Object::new();
    let write = Function::new_with_args("text", body);
    Reflect::set(&stub, &"writeText".into(), &write).expect("writeText");
    let descriptor = Object::new();
    Reflect::set(&descriptor, &"value".into(), &stub).expect("value");
    Reflect::set(&descriptor, &"configurable".into(), &JsValue::TRUE).expect("configurable");
    let _ = Object::define_property(&navigator, &"clipboard".into(), &descriptor);
    navigator
}

fn restore_clipboard(navigator: &Navigator) {
    Reflect::delete_property(navigator, &"clipboard".into()).expect("restore clipboard");
}

fn inline_transform(el: &Element) -> String {
    el.dyn_ref::<HtmlElement>()
        .expect("html")
        .style()
        .get_property_value("transform")
        .expect("style")
}

fn carousel_markup(items: usize) -> String {
    let cards: String = (0..items)
        .map(|i| format!(r#"<div class="carousel-item">{i}</div>"#))
        .collect();
    format!(
        r#"<div id="projects-carousel">{cards}</div>
           <button id="prev-btn">prev</button>
           <button id="next-btn">next</button>
           <div id="carousel-indicators"></div>"#
    )
}

fn button(id: &str) -> HtmlButtonElement {
    dom::by_id(&dom::document().expect("document"), id).expect("button")
}

fn indicators() -> Vec<Element> {
    dom::query_all(&dom::document().expect("document"), ".carousel-indicator")
}

#[wasm_bindgen_test]
fn carousel_mounts_and_steps() {
    let _fixture = Fixture::new(&carousel_markup(10));
    let app = mount(None);

    let per_view = Breakpoints::default().items_per_view(dom::viewport_width());
    assert_eq!(app.carousel_index(), Some(0));
    assert!(button("prev-btn").disabled());
    assert!(!button("next-btn").disabled());
    assert_eq!(indicators().len(), 10usize.div_ceil(per_view));
    assert!(indicators()[0].class_list().contains("active"));

    button("next-btn").click();
    assert_eq!(app.carousel_index(), Some(1));
    assert!(!button("prev-btn").disabled());

    button("prev-btn").click();
    button("prev-btn").click();
    assert_eq!(app.carousel_index(), Some(0));
}

#[wasm_bindgen_test]
fn indicator_click_jumps_to_page() {
    let _fixture = Fixture::new(&carousel_markup(10));
    let app = mount(None);
    let per_view = Breakpoints::default().items_per_view(dom::viewport_width());

    indicators()[1]
        .dyn_ref::<HtmlElement>()
        .expect("indicator is html")
        .click();
    assert_eq!(app.carousel_index(), Some(per_view));
    let active: Vec<bool> = indicators()
        .iter()
        .map(|el| el.class_list().contains("active"))
        .collect();
    assert_eq!(active.iter().filter(|a| **a).count(), 1);
    assert!(active[1]);
}

#[wasm_bindgen_test]
fn missing_carousel_markup_is_a_noop() {
    let _fixture = Fixture::new(r#"<div id="projects-carousel"></div>"#);
    let app = mount(None);
    assert_eq!(app.carousel_index(), None);
}

#[wasm_bindgen_test]
fn toggle_theme_flips_attribute_and_storage() {
    let storage = dom::window()
        .expect("window")
        .local_storage()
        .expect("storage")
        .expect("storage enabled");
    storage.set_item("theme", "dark").expect("seed");

    let app = mount(None);
    assert_eq!(app.toggle_theme(), "light");
    assert_eq!(storage.get_item("theme").expect("get").as_deref(), Some("light"));
    let body = dom::document().expect("document").body().expect("body");
    assert_eq!(body.get_attribute("data-theme").as_deref(), Some("light"));

    storage.remove_item("theme").expect("cleanup");
}

#[wasm_bindgen_test]
fn validate_form_marks_empty_required_fields() {
    let fixture = Fixture::new(
        r#"<form id="contact">
             <input id="name" required>
             <textarea id="msg" required>  </textarea>
             <input id="opt">
           </form>"#,
    );
    let app = mount(None);
    let form = fixture.root.query_selector("#contact").expect("q").expect("form");
    assert!(!app.validate_form(&form));

    let document = dom::document().expect("document");
    let name: HtmlInputElement = dom::by_id(&document, "name").expect("name");
    assert!(name.class_list().contains("border-red-500"));

    name.set_value("Ada");
    let msg: Element = dom::by_id(&document, "msg").expect("msg");
    msg.dyn_ref::<web_sys::HtmlTextAreaElement>()
        .expect("textarea")
        .set_value("hello");
    assert!(app.validate_form(&form));
    assert!(!name.class_list().contains("border-red-500"));
}

#[wasm_bindgen_test]
fn notifications_are_appended_to_body() {
    let app = mount(None);
    app.show_notification("hello", Some("success".into()));
    app.show_notification("fallback", Some("bogus".into()));
    assert_eq!(app.notification_count(), 2);
    let toasts = dom::query_all(&dom::document().expect("document"), ".bg-green-500");
    assert!(toasts.iter().any(|t| t.text_content().as_deref() == Some("hello")));
    let infos = dom::query_all(&dom::document().expect("document"), ".bg-blue-500");
    assert!(infos.iter().any(|t| t.text_content().as_deref() == Some("fallback")));
}

#[wasm_bindgen_test]
fn mobile_menu_toggles_and_closes_on_link() {
    let _fixture = Fixture::new(r#"<button id="mobile-menu-btn"><i class="fa-bars"></i></button>"#);
    let app = mount(None);
    let btn = button("mobile-menu-btn");

    btn.click();
    assert!(app.menu_open());
    let document = dom::document().expect("document");
    let icon = btn.query_selector("i").expect("q").expect("icon");
    assert!(icon.class_list().contains("fa-times"));

    let link = dom::query_all(&document, ".mobile-menu-link")
        .into_iter()
        .next()
        .expect("menu link");
    link.dyn_ref::<HtmlElement>().expect("html").click();
    assert!(!app.menu_open());
    assert!(icon.class_list().contains("fa-bars"));

    for overlay in dom::query_all(&document, ".mobile-menu") {
        overlay.remove();
    }
}

#[wasm_bindgen_test]
fn constructor_refuses_while_global_is_published() {
    let window = dom::window().expect("window");
    Reflect::set(&window, &GLOBAL_NAME.into(), &Object::new()).expect("publish");
    assert!(PortfolioApp::new(None).is_err());
    Reflect::delete_property(&window, &GLOBAL_NAME.into()).expect("clear global");
    assert!(PortfolioApp::new(None).is_ok());
}

#[wasm_bindgen_test]
async fn rejected_clipboard_write_shows_error_toast() {
    let navigator = stub_clipboard("return Promise.reject(new Error('denied'));");
    let app = mount(None);
    app.copy_email();
    sleep(50).await;
    restore_clipboard(&navigator);
    assert_eq!(toasts_with_text("bg-red-500", "Failed to copy email"), 1);
}

#[wasm_bindgen_test]
async fn accepted_clipboard_write_shows_success_toast() {
    let navigator = stub_clipboard("return Promise.resolve();");
    let app = mount(None);
    app.copy_email();
    sleep(50).await;
    restore_clipboard(&navigator);
    assert_eq!(
        toasts_with_text("bg-green-500", "Email copied to clipboard!"),
        1
    );
}

#[wasm_bindgen_test]
async fn toast_removes_itself_after_ttl() {
    let app = mount(Some(r#"{"notifications":{"ttlMs":10}}"#));
    app.show_notification("short-lived", Some("info".into()));
    assert_eq!(app.notification_count(), 1);
    assert_eq!(toasts_with_text("bg-blue-500", "short-lived"), 1);

    sleep(100).await;
    assert_eq!(app.notification_count(), 0);
    assert_eq!(toasts_with_text("bg-blue-500", "short-lived"), 0);
}

#[wasm_bindgen_test]
async fn resize_burst_rebuilds_indicators_once_after_quiet_period() {
    let _fixture = Fixture::new(&carousel_markup(10));
    let app = mount(None);
    app.carousel_next();
    app.carousel_next();
    let index = app.carousel_index();
    let original = indicators()[0].clone();

    let window = dom::window().expect("window");
    for _ in 0..5 {
        let event = Event::new("resize").expect("event");
        window.dispatch_event(&event).expect("dispatch");
    }
    sleep(100).await;
    assert!(original.is_connected(), "rebuilt before the quiet period");

    sleep(300).await;
    assert!(!original.is_connected(), "indicators not rebuilt");
    let rebuilt = indicators()[0].clone();

    sleep(400).await;
    assert!(rebuilt.is_connected(), "burst rebuilt more than once");
    // Same viewport width, so the clamp keeps the index.
    assert_eq!(app.carousel_index(), index);
    let active = indicators()
        .iter()
        .filter(|el| el.class_list().contains("active"))
        .count();
    assert_eq!(active, 1);
}

#[wasm_bindgen_test]
async fn visible_block_fades_in_and_offscreen_block_waits() {
    let _fixture = Fixture::new(
        r#"<div id="seen" class="service-card"
                style="position:fixed;top:0;left:0;width:200px;height:100px;transform:translateY(20px)">a</div>
           <div id="unseen" class="project-card"
                style="position:fixed;top:5000px;left:0;width:200px;height:100px">b</div>"#,
    );
    let app = mount(None);
    let document = dom::document().expect("document");
    let seen: Element = dom::by_id(&document, "seen").expect("seen");
    let unseen: Element = dom::by_id(&document, "unseen").expect("unseen");
    assert_eq!(inline_transform(&seen), "none");

    sleep(200).await;
    assert!(seen.class_list().contains("fade-in-up"));
    assert_eq!(inline_transform(&seen), "none");
    assert!(!unseen.class_list().contains("fade-in-up"));
    assert_eq!(app.revealed_count(), 1);
}

#[wasm_bindgen_test]
async fn lazy_image_takes_its_source_when_visible() {
    const PIXEL: &str = "data:image/gif;base64,R0lGODlhAQABAAAAACw=";
    let _fixture = Fixture::new(&format!(
        r#"<img id="lazy" class="opacity-0" data-src="{PIXEL}"
                style="position:fixed;top:0;left:0;width:10px;height:10px">"#
    ));
    let app = mount(None);
    assert!(app.lazy_images_active());

    sleep(200).await;
    let img: Element = dom::by_id(&dom::document().expect("document"), "lazy").expect("img");
    assert_eq!(img.get_attribute("src").as_deref(), Some(PIXEL));
    assert!(img.class_list().contains("opacity-100"));
    assert!(!img.class_list().contains("opacity-0"));
}

#[wasm_bindgen_test]
fn fragment_link_click_keeps_the_url_hash() {
    let _fixture = Fixture::new(
        r#"<a id="jump" href="#folio-scroll-target">go</a>
           <div style="height:4000px"></div>
           <section id="folio-scroll-target">target</section>"#,
    );
    let window = dom::window().expect("window");
    let hash_before = window.location().hash().expect("hash");
    let _app = mount(None);

    let link: HtmlElement = dom::by_id(&dom::document().expect("document"), "jump").expect("link");
    link.click();
    assert_eq!(window.location().hash().expect("hash"), hash_before);
    window.scroll_to_with_x_and_y(0.0, 0.0);
}
