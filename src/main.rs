//! Honeycomb Folio entry point
//!
//! On the web: builds the current page's honeycomb and runs the frame loop.
//! Natively: prints a page layout as JSON or as an SVG preview.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_site {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlElement, MouseEvent};

    use honeycomb_folio::anim::{Frame, HeaderScript, ScriptPlayer, SplashCycle};
    use honeycomb_folio::consts::{FRAME_DT, TYPE_CHAR_MS};
    use honeycomb_folio::content::{ContentLookup, ContentRecord, PageContent, TileAction};
    use honeycomb_folio::honeycomb::{
        Carousel, Cell, Debouncer, HoverTracker, LayoutSlot, LayoutState, Placement, TileKey,
        Viewport, ZoomStyle, layout_grid, layout_strip,
    };
    use honeycomb_folio::lifecycle::LoopState;
    use honeycomb_folio::shape::HEX_SHAPE;
    use honeycomb_folio::{PageConfig, PageKind, Settings, is_mobile};

    const CONTAINER_ID: &str = "honeycomb-container";
    const INDICATORS_ID: &str = "carousel-indicators";
    const MOBILE_NOTICE_ID: &str = "mobile-notice-banner";
    const RESUME_DIR: &str = "./Assets/Resumes";
    /// Entrance fade-in stagger per tile (ms)
    const ENTRANCE_STAGGER_MS: usize = 8;
    /// How long a download status toast stays up (ms)
    const STATUS_MS: f64 = 3000.0;

    /// A carousel tile and its unscrolled x
    struct MovingTile {
        element: HtmlElement,
        base_x: f32,
    }

    /// Page instance holding all state
    struct Site {
        document: Document,
        container: Element,
        page: PageKind,
        config: PageConfig,
        settings: Settings,
        content: PageContent,
        layout: LayoutSlot,
        carousel: Option<Carousel>,
        hover: HoverTracker,
        resize: Debouncer,
        header: ScriptPlayer,
        header_started: bool,
        splash: Option<SplashCycle>,
        header_link: Option<String>,
        moving: Vec<MovingTile>,
        indicators: Vec<Element>,
        active_indicator: Option<u32>,
        status: Option<(Element, f64)>,
        built_once: bool,
        last_time: f64,
        state: LoopState,
    }

    impl Site {
        fn new(
            document: Document,
            container: Element,
            config: PageConfig,
            settings: Settings,
        ) -> Self {
            let carousel = config.carousel.map(|c| {
                Carousel::new(config.grid.cols, settings.carousel_speed(c.speed))
                    .with_replicas(c.replicas)
            });
            Self {
                document,
                container,
                page: config.page,
                content: PageContent::new(config.page),
                hover: HoverTracker::new(settings.effective_zoom(config.zoom_scale)),
                config,
                settings,
                layout: LayoutSlot::new(),
                carousel,
                resize: Debouncer::default(),
                header: ScriptPlayer::new(),
                header_started: false,
                splash: None,
                header_link: None,
                moving: Vec::new(),
                indicators: Vec::new(),
                active_indicator: None,
                status: None,
                built_once: false,
                last_time: 0.0,
                state: LoopState::Running,
            }
        }

        /// Recompute the layout and replace every tile in the container
        fn rebuild(&mut self) {
            let viewport = read_viewport();
            self.update_mobile_notice(viewport);

            let layout = match LayoutState::compute(viewport, &self.config) {
                Ok(layout) => layout,
                Err(e) => {
                    if e.is_fatal() {
                        log::error!("Layout failed: {}", e);
                    } else {
                        log::warn!("Skipping layout: {}", e);
                    }
                    self.clear_grid();
                    return;
                }
            };

            // Rescale from the last good pass even if an empty pass came between
            if let (Some(carousel), Some(old)) = (self.carousel.as_mut(), self.layout.last_good()) {
                carousel.adopt_layout(old, &layout);
            }

            let placements = match &self.carousel {
                Some(carousel) => {
                    layout_strip(&layout, &self.config.grid, &self.content, carousel.replicas())
                }
                None => layout_grid(&layout, &self.config.grid, &self.content),
            };

            let fragment = self.document.create_document_fragment();
            let animate_in = !self.built_once && self.settings.effective_entrance_animation();
            self.moving.clear();

            for (index, placement) in placements.iter().enumerate() {
                let tile = match self.create_tile(placement) {
                    Ok(tile) => tile,
                    Err(e) => {
                        log::warn!("Failed to create tile {}: {:?}", placement.cell, e);
                        continue;
                    }
                };
                if animate_in {
                    let delay = format!("{}ms", index * ENTRANCE_STAGGER_MS);
                    let _ = tile.style().set_property("animation-delay", &delay);
                    let _ = tile.class_list().add_1("fade-in");
                }
                if self.carousel.is_some() {
                    self.moving.push(MovingTile {
                        element: tile.clone(),
                        base_x: placement.position.x,
                    });
                }
                let _ = fragment.append_child(&tile);
            }

            self.container.set_inner_html("");
            let _ = self.container.append_child(&fragment);
            self.hover.clear();
            self.layout.install(layout);
            self.built_once = true;
            self.position_moving_tiles();

            log::info!(
                "Laid out {} tiles at {}x{}",
                placements.len(),
                viewport.width,
                viewport.height
            );
        }

        fn clear_grid(&mut self) {
            self.container.set_inner_html("");
            self.moving.clear();
            self.hover.clear();
            self.layout.clear();
        }

        fn element(&self, tag: &str, class: &str) -> Result<HtmlElement, JsValue> {
            let el: HtmlElement = self.document.create_element(tag)?.unchecked_into();
            el.set_class_name(class);
            Ok(el)
        }

        fn create_tile(&self, placement: &Placement) -> Result<HtmlElement, JsValue> {
            let class = if self.carousel.is_some() { "hex carousel-hex" } else { "hex" };
            let tile = self.element("div", class)?;
            tile.set_attribute("data-hex-id", &placement.cell.to_string())?;
            tile.set_attribute("data-replica", &placement.replica.to_string())?;

            let style = tile.style();
            style.set_property("left", &px(placement.position.x))?;
            style.set_property("top", &px(placement.position.y))?;
            style.set_property("width", &px(placement.size.x))?;
            style.set_property("height", &px(placement.size.y))?;

            // Shape first, content layered on top
            tile.set_inner_html(&HEX_SHAPE.to_svg());
            let body = self.element("div", "hex-content")?;
            if let Some(content) = &placement.content {
                self.fill_content(&body, content)?;
                tile.class_list().add_1(&format!("{}-hex", self.page.as_str()))?;
            }
            tile.append_child(&body)?;
            Ok(tile)
        }

        fn fill_content(&self, body: &HtmlElement, content: &ContentRecord) -> Result<(), JsValue> {
            let icon = self.element("div", "hex-icon")?;
            icon.set_text_content(Some(&content.icon));
            icon.style().set_property(
                "background",
                &format!(
                    "linear-gradient(135deg, {} 0%, {} 100%)",
                    content.color,
                    content.gradient_end()
                ),
            )?;
            body.append_child(&icon)?;

            let title = self.element("div", "hex-title")?;
            title.set_text_content(Some(&content.title));
            body.append_child(&title)?;

            if let Some(subtitle) = &content.subtitle {
                let el = self.element("div", "hex-subtitle")?;
                el.set_text_content(Some(subtitle));
                body.append_child(&el)?;
            }

            if let Some(level) = content.level {
                let dots = self.element("div", "hex-dots")?;
                for i in 1..=5 {
                    let dot = self.element("div", "hex-dot")?;
                    let i = i as f32;
                    if i <= level {
                        dot.class_list().add_1("filled")?;
                    } else if i - 0.5 <= level {
                        dot.class_list().add_1("half")?;
                    }
                    dots.append_child(&dot)?;
                }
                body.append_child(&dots)?;
            }

            if let Some(progress) = content.progress {
                let bar = self.element("div", "progress-bar")?;
                let fill = self.element("div", "progress-fill")?;
                fill.style().set_property("width", &format!("{}%", progress))?;
                bar.append_child(&fill)?;
                body.append_child(&bar)?;
            }

            if let Some(description) = &content.description {
                let el = self.element("div", "hex-description")?;
                el.set_text_content(Some(description));
                body.append_child(&el)?;
            }

            Ok(())
        }

        /// Write every carousel tile's wrapped x
        fn position_moving_tiles(&self) {
            let (Some(carousel), Some(layout)) = (&self.carousel, self.layout.current()) else {
                return;
            };
            for tile in &self.moving {
                let x = carousel.wrapped_x(tile.base_x, layout);
                let _ = tile.element.style().set_property("left", &px(x));
            }
        }

        fn update_mobile_notice(&self, viewport: Viewport) {
            let existing = self.document.get_element_by_id(MOBILE_NOTICE_ID);
            let copyright = self
                .document
                .get_element_by_id("copyright")
                .map(|el| el.unchecked_into::<HtmlElement>());
            let show = self.settings.mobile_notice && is_mobile(viewport.width);

            match (show, existing) {
                (true, None) => {
                    let Ok(notice) = self.element("div", "mobile-notice") else {
                        return;
                    };
                    notice.set_id(MOBILE_NOTICE_ID);
                    let (Ok(text), Ok(close)) = (
                        self.element("span", "notice-text"),
                        self.element("button", "notice-close"),
                    ) else {
                        return;
                    };
                    text.set_text_content(Some(
                        "This website is designed to be viewed in desktop mode. \
                         This is a barebones, functional experience without animations \
                         and contains less information as well.",
                    ));
                    close.set_text_content(Some("\u{00d7}"));
                    let _ = close.set_attribute("aria-label", "Dismiss");
                    let _ = notice.append_child(&text);
                    let _ = notice.append_child(&close);
                    if let Some(body) = self.document.body() {
                        let _ = body.append_child(&notice);
                    }
                    if let Some(el) = copyright {
                        let _ = el.style().set_property("display", "none");
                    }
                }
                (false, Some(notice)) => {
                    notice.remove();
                    if let Some(el) = copyright {
                        let _ = el.style().set_property("display", "block");
                    }
                }
                _ => {}
            }
        }

        fn header_element(&self) -> Option<Element> {
            self.document.query_selector("#main-header h1").ok().flatten()
        }

        /// Queue the page's header script
        fn start_header(&mut self, now: f64) {
            self.header_started = true;
            if self.header_element().is_none() {
                return;
            }

            let animate = self.settings.effective_header_animation();
            let script = match self.page {
                PageKind::Home => {
                    let seed = js_sys::Date::now() as u64;
                    let splash = SplashCycle::with_defaults(seed);
                    let script = if animate {
                        splash.intro_script()
                    } else {
                        HeaderScript::new().show(splash.base())
                    };
                    if animate {
                        self.splash = Some(splash);
                    }
                    script
                }
                page => match page.header() {
                    Some(text) if animate => HeaderScript::new().type_in("", text, TYPE_CHAR_MS),
                    Some(text) => HeaderScript::new().show(text),
                    None => return,
                },
            };
            self.header.play(script, now);
        }

        fn update_header(&mut self, now: f64) {
            if !self.header_started {
                self.start_header(now);
            }
            if let Some(frame) = self.header.advance(now) {
                self.apply_header_frame(&frame);
            }
            if self.header.is_idle() {
                if let Some(splash) = self.splash.as_mut() {
                    self.header.queue(splash.next_script(), now);
                }
            }
        }

        fn apply_header_frame(&mut self, frame: &Frame) {
            let Some(header) = self.header_element() else {
                return;
            };
            header.set_text_content(Some(&frame.text));

            if frame.link != self.header_link {
                let clickable = frame.link.is_some();
                let style = header.unchecked_ref::<HtmlElement>().style();
                let _ = style.set_property("cursor", if clickable { "pointer" } else { "default" });
                let _ = style.set_property(
                    "text-decoration",
                    if clickable { "underline" } else { "none" },
                );
                let _ = style.set_property("color", if clickable { "#61dafb" } else { "white" });
                self.header_link = frame.link.clone();
            }
        }

        /// One dot per carousel item, if the page has an indicator bar
        fn build_indicators(&mut self) {
            let Some(carousel) = &self.carousel else {
                return;
            };
            let Some(bar) = self.document.get_element_by_id(INDICATORS_ID) else {
                return;
            };
            bar.set_inner_html("");
            self.indicators.clear();
            for i in 0..carousel.total_items() {
                let Ok(dot) = self.element("button", "indicator-dot") else {
                    continue;
                };
                let _ = dot.set_attribute("data-index", &i.to_string());
                let _ = dot.set_attribute("aria-label", &format!("Go to item {}", i + 1));
                let _ = bar.append_child(&dot);
                self.indicators.push(dot.into());
            }
        }

        fn update_indicators(&mut self) {
            let (Some(carousel), Some(layout)) = (&self.carousel, self.layout.current()) else {
                return;
            };
            if self.indicators.is_empty() {
                return;
            }
            let center = carousel.center_index(layout);
            if self.active_indicator == Some(center) {
                return;
            }
            if let Some(prev) = self
                .active_indicator
                .and_then(|i| self.indicators.get(i as usize))
            {
                let _ = prev.class_list().remove_1("active");
            }
            if let Some(dot) = self.indicators.get(center as usize) {
                let _ = dot.class_list().add_1("active");
            }
            self.active_indicator = Some(center);
        }

        fn navigate_carousel(&mut self, index: u32) {
            let (Some(carousel), Some(layout)) = (self.carousel.as_mut(), self.layout.current())
            else {
                return;
            };
            // Callers hand in a DOM attribute; keep it in range
            let index = index % carousel.total_items().max(1);
            carousel.navigate_to(index, layout);
        }

        fn show_status(&mut self, message: &str, is_error: bool) {
            if let Some((old, _)) = self.status.take() {
                old.remove();
            }
            let class = if is_error {
                "download-status error show"
            } else {
                "download-status show"
            };
            let Ok(status) = self.element("div", class) else {
                return;
            };
            status.set_text_content(Some(message));
            if let Some(body) = self.document.body() {
                let _ = body.append_child(&status);
            }
            self.status = Some((status.into(), self.last_time + STATUS_MS));
        }

        fn expire_status(&mut self, now: f64) {
            if let Some((_, expires)) = &self.status {
                if now >= *expires {
                    if let Some((el, _)) = self.status.take() {
                        el.remove();
                    }
                }
            }
        }

        fn perform_action(&mut self, action: &TileAction) {
            let Some(window) = web_sys::window() else {
                return;
            };
            match action {
                TileAction::Navigate(href) => {
                    self.stop();
                    let _ = window.location().set_href(href);
                }
                TileAction::External(url) => {
                    let _ = window.open_with_url_and_target(url, "_blank");
                }
                TileAction::Download(file) => self.download(file),
                TileAction::Email(draft) => {
                    let _ = window.open_with_url_and_target(&draft.mailto_url(), "_blank");
                }
            }
        }

        fn download(&mut self, file: &str) {
            let result = (|| -> Result<(), JsValue> {
                let link = self.element("a", "")?;
                link.set_attribute("href", &format!("{}/{}", RESUME_DIR, file))?;
                link.set_attribute("download", file)?;
                link.style().set_property("display", "none")?;
                let body = self.document.body().ok_or_else(|| JsValue::from_str("no body"))?;
                body.append_child(&link)?;
                link.click();
                link.remove();
                Ok(())
            })();

            match result {
                Ok(()) => {
                    log::info!("Downloading {}", file);
                    self.show_status(&format!("{} downloaded successfully!", file), false);
                }
                Err(e) => {
                    log::error!("Download of {} failed: {:?}", file, e);
                    self.show_status("Download failed. Please try again.", true);
                }
            }
        }

        /// One animation frame
        fn frame(&mut self, time: f64) {
            let dt = if self.last_time > 0.0 {
                ((time - self.last_time) / 1000.0) as f32
            } else {
                FRAME_DT
            };
            self.last_time = time;

            if self.resize.poll(time) {
                self.rebuild();
            }

            self.update_header(time);

            if let (Some(carousel), Some(layout)) = (self.carousel.as_mut(), self.layout.current())
            {
                carousel.advance(dt, layout);
            }
            self.position_moving_tiles();
            self.update_indicators();
            self.expire_status(time);
        }

        fn halt_timers(&mut self) {
            self.resize.cancel();
            self.header.cancel();
            if let Some(carousel) = self.carousel.as_mut() {
                carousel.stop();
            }
        }

        /// Tear down timers and the frame loop for good
        fn stop(&mut self) {
            let was_running = self.state.is_running();
            self.state.stop();
            if was_running {
                self.halt_timers();
                log::info!("Page loop stopped");
            }
        }

        /// `pagehide`: a cached page pauses, an unloading one stops
        fn page_hide(&mut self, persisted: bool) {
            if self.state.page_hide(persisted) {
                self.halt_timers();
                log::info!("Page loop {}", if persisted { "paused" } else { "stopped" });
            }
        }

        /// `pageshow`: returns true if the frame loop must be requested again
        fn page_show(&mut self, persisted: bool) -> bool {
            if !self.state.page_show(persisted) {
                return false;
            }
            if let Some(carousel) = self.carousel.as_mut() {
                carousel.start();
            }
            self.header_started = false;
            self.splash = None;
            self.last_time = 0.0;
            self.rebuild();
            log::info!("Page loop resumed");
            true
        }
    }

    fn px(value: f32) -> String {
        format!("{}px", value)
    }

    fn read_viewport() -> Viewport {
        let Some(window) = web_sys::window() else {
            return Viewport::new(0.0, 0.0);
        };
        let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        Viewport::new(width as f32, height as f32)
    }

    /// Page from `<body data-page>`, falling back to the file name
    fn detect_page(document: &Document) -> PageKind {
        let from_attr = document
            .body()
            .and_then(|b| b.get_attribute("data-page"))
            .and_then(|name| PageKind::from_str(&name));
        if let Some(page) = from_attr {
            return page;
        }

        let path = web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default();
        let file = path.rsplit('/').next().unwrap_or_default();
        PageKind::from_str(file).unwrap_or_else(|| {
            log::warn!("Unknown page '{}', using home layout", file);
            PageKind::Home
        })
    }

    /// Tile element under an event target
    fn tile_at(target: Option<web_sys::EventTarget>) -> Option<HtmlElement> {
        let element: Element = target?.dyn_into().ok()?;
        let tile = element.closest(".hex").ok().flatten()?;
        Some(tile.unchecked_into())
    }

    fn tile_key(tile: &HtmlElement) -> Option<TileKey> {
        let cell = Cell::parse(&tile.get_attribute("data-hex-id")?)?;
        let replica = tile
            .get_attribute("data-replica")
            .and_then(|r| r.parse().ok())
            .unwrap_or(0);
        Some(TileKey { cell, replica })
    }

    fn apply_zoom(tile: &HtmlElement, zoom: ZoomStyle) {
        let style = tile.style();
        let _ = style.set_property_with_priority("transform", &zoom.transform(), "important");
        let _ = style.set_property_with_priority("z-index", &zoom.z_index.to_string(), "important");
        let _ = style.set_property_with_priority("filter", &zoom.filter(), "important");
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Honeycomb Folio starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let page = detect_page(&document);
        let config = PageConfig::preset(page);
        if let Err(e) = config.validate() {
            log::error!("Invalid {} page config: {}", page.as_str(), e);
            return;
        }

        let Some(container) = document.get_element_by_id(CONTAINER_ID) else {
            log::error!("No #{} element on page", CONTAINER_ID);
            return;
        };

        let settings = Settings::load();
        let site = Rc::new(RefCell::new(Site::new(document, container, config, settings)));
        {
            let mut s = site.borrow_mut();
            s.rebuild();
            s.build_indicators();
        }

        setup_resize_handler(site.clone());
        setup_hover_handlers(site.clone());
        setup_click_handlers(site.clone());
        setup_lifecycle(site.clone());

        request_animation_frame(site);

        log::info!("Honeycomb Folio running ({})", page.as_str());
    }

    fn setup_resize_handler(site: Rc<RefCell<Site>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let mut s = site.borrow_mut();
            let now = s.last_time;
            s.resize.trigger(now);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_hover_handlers(site: Rc<RefCell<Site>>) {
        let container = site.borrow().container.clone();

        // Delegated enter
        {
            let site = site.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let Some(tile) = tile_at(event.target()) else {
                    return;
                };
                let Some(key) = tile_key(&tile) else {
                    return;
                };
                if let Some(zoom) = site.borrow_mut().hover.enter(key) {
                    apply_zoom(&tile, zoom);
                }
            });
            let _ = container
                .add_event_listener_with_callback("mouseover", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Delegated leave; moving between children of one tile isn't a leave
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let Some(tile) = tile_at(event.target()) else {
                    return;
                };
                if let Some(into) = tile_at(event.related_target()) {
                    if into == tile {
                        return;
                    }
                }
                let Some(key) = tile_key(&tile) else {
                    return;
                };
                if let Some(rest) = site.borrow_mut().hover.leave(key) {
                    apply_zoom(&tile, rest);
                }
            });
            let _ = container
                .add_event_listener_with_callback("mouseout", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_click_handlers(site: Rc<RefCell<Site>>) {
        let document = site.borrow().document.clone();
        let container = site.borrow().container.clone();

        // Tile actions
        {
            let site = site.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let Some(cell) = tile_at(event.target())
                    .as_ref()
                    .and_then(tile_key)
                    .map(|key| key.cell)
                else {
                    return;
                };
                let mut s = site.borrow_mut();
                let action = s.content.lookup(cell.row, cell.col).and_then(|c| c.action);
                if let Some(action) = action {
                    log::info!("Tile {} clicked", cell);
                    s.perform_action(&action);
                }
            });
            let _ = container
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Back button
        if let Some(btn) = document.get_element_by_id("back-btn") {
            let site = site.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                site.borrow_mut()
                    .perform_action(&TileAction::Navigate("index.html".into()));
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Clickable splash header
        if let Some(header) = site.borrow().header_element() {
            let site = site.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let link = site.borrow().header_link.clone();
                if let (Some(link), Some(window)) = (link, web_sys::window()) {
                    let _ = window.open_with_url_and_target(&link, "_blank");
                }
            });
            let _ =
                header.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mobile notice close button; the banner comes and goes with resizes
        {
            let site = site.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let hit = event
                    .target()
                    .and_then(|t| t.dyn_into::<Element>().ok())
                    .and_then(|el| el.closest(".notice-close").ok().flatten())
                    .is_some();
                if hit {
                    let mut s = site.borrow_mut();
                    s.settings.dismiss_mobile_notice();
                    s.update_mobile_notice(read_viewport());
                    log::info!("Mobile notice dismissed");
                }
            });
            let _ = document
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Carousel indicator dots
        if let Some(bar) = document.get_element_by_id(INDICATORS_ID) {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let index = event
                    .target()
                    .and_then(|t| t.dyn_into::<Element>().ok())
                    .and_then(|el| el.closest(".indicator-dot").ok().flatten())
                    .and_then(|dot| dot.get_attribute("data-index"))
                    .and_then(|i| i.parse::<u32>().ok());
                if let Some(index) = index {
                    site.borrow_mut().navigate_carousel(index);
                }
            });
            let _ = bar.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_lifecycle(site: Rc<RefCell<Site>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        {
            let site = site.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
                site.borrow_mut().page_hide(persisted(&event));
            });
            let _ = window
                .add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
            let resumed = site.borrow_mut().page_show(persisted(&event));
            if resumed {
                request_animation_frame(site.clone());
            }
        });
        let _ =
            window.add_event_listener_with_callback("pageshow", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn persisted(event: &web_sys::Event) -> bool {
        event
            .dyn_ref::<web_sys::PageTransitionEvent>()
            .is_some_and(|e| e.persisted())
    }

    fn request_animation_frame(site: Rc<RefCell<Site>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            page_loop(site, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn page_loop(site: Rc<RefCell<Site>>, time: f64) {
        {
            let mut s = site.borrow_mut();
            if !s.state.is_running() {
                return;
            }
            s.frame(time);
        }

        request_animation_frame(site);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_site::run();
}

#[cfg(not(target_arch = "wasm32"))]
const USAGE: &str =
    "Usage: honeycomb-folio [home|projects|skills|resume|dsa] [width] [height] [--svg]";

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use honeycomb_folio::content::PageContent;
    use honeycomb_folio::honeycomb::{LayoutState, Viewport, layout_grid, layout_strip};
    use honeycomb_folio::shape::preview_svg;
    use honeycomb_folio::{PageConfig, PageKind};

    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let svg = args.iter().any(|a| a == "--svg");
    let positional: Vec<&str> = args
        .iter()
        .filter(|a| !a.starts_with("--"))
        .map(String::as_str)
        .collect();

    let page_name = positional.first().copied().unwrap_or("home");
    let Some(page) = PageKind::from_str(page_name) else {
        eprintln!("Unknown page '{}'", page_name);
        eprintln!("{}", USAGE);
        std::process::exit(2);
    };
    let width = positional.get(1).and_then(|w| w.parse().ok()).unwrap_or(1440.0);
    let height = positional.get(2).and_then(|h| h.parse().ok()).unwrap_or(900.0);

    log::info!("Laying out {} page at {}x{}", page.as_str(), width, height);

    let config = PageConfig::preset(page);
    let viewport = Viewport::new(width, height);
    let layout = match LayoutState::compute(viewport, &config) {
        Ok(layout) => layout,
        Err(e) => {
            eprintln!("Layout failed: {}", e);
            std::process::exit(1);
        }
    };

    let content = PageContent::new(page);
    let placements = match &config.carousel {
        Some(carousel) => layout_strip(&layout, &config.grid, &content, carousel.replicas),
        None => layout_grid(&layout, &config.grid, &content),
    };
    log::info!(
        "{} tiles (strip copies: {})",
        placements.len(),
        config.carousel.map_or(1, |c| c.replicas)
    );

    if svg {
        println!("{}", preview_svg(&placements, viewport));
    } else {
        match serde_json::to_string_pretty(&placements) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Failed to serialize layout: {}", e);
                std::process::exit(1);
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
