#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), eframe::Error> {
    // Set up logging for development
    env_logger::init();

    // Run the converter application
    dms2dd::run_app()
}

// When compiled for the web, start the app inside the page's canvas.
#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let web_options = eframe::WebOptions::default();
    wasm_bindgen_futures::spawn_local(async {
        let document = web_sys::window()
            .expect("no window")
            .document()
            .expect("no document");
        let canvas = document
            .get_element_by_id("dms2dd_canvas")
            .expect("no element with id dms2dd_canvas")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("dms2dd_canvas is not a canvas element");

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(dms2dd::ConverterApp::new(cc)))),
            )
            .await
            .expect("failed to start eframe");
    });
}
