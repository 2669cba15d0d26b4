mod error;
mod input;
mod renderer;

use glutin::{
    dpi::PhysicalSize,
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::{Window, WindowBuilder},
    Api, ContextBuilder, ContextWrapper, GlProfile, GlRequest, PossiblyCurrent,
};
use std::process;
use std::time::Instant;

use error::{catch_window_system, Error};
use input::Input;
use renderer::{
    device::{Device, GlDevice},
    Extent2D, Renderer,
};

const TITLE: &str = "LearnOpenGL";

const DIMS: Extent2D = Extent2D {
    width: 800,
    height: 600,
};

const GL_VERSION: (u8, u8) = (3, 3);

type WindowedContext = ContextWrapper<PossiblyCurrent, Window>;

fn logger() -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(log::LevelFilter::Info)
        .target(env_logger::Target::Stdout);
    builder
}

fn init_logging() {
    logger().init();
}

fn create_context(event_loop: &EventLoop<()>) -> Result<WindowedContext, Error> {
    let wb = WindowBuilder::new()
        .with_title(TITLE)
        .with_inner_size(glutin::dpi::Size::Physical(PhysicalSize::new(
            DIMS.width,
            DIMS.height,
        )))
        .with_resizable(true);

    let context = ContextBuilder::new()
        .with_gl(GlRequest::Specific(Api::OpenGl, GL_VERSION))
        .with_gl_profile(GlProfile::Core)
        .build_windowed(wb, event_loop)?;

    let context = unsafe { context.make_current() }.map_err(|(_, err)| err)?;
    log::info!(
        "created {:?} {}.{} core context",
        context.get_api(),
        GL_VERSION.0,
        GL_VERSION.1
    );
    Ok(context)
}

fn setup() -> Result<(EventLoop<()>, WindowedContext, Renderer<GlDevice>), Error> {
    let event_loop = catch_window_system(EventLoop::new)?;
    let context = create_context(&event_loop)?;
    let device = GlDevice::load(|symbol| context.get_proc_address(symbol))?;
    let renderer = Renderer::new(device, DIMS);
    Ok((event_loop, context, renderer))
}

/// Renders one frame unless a close was requested, in which case the loop
/// exits without drawing.
fn frame<D: Device>(input: &Input, renderer: &mut Renderer<D>, elapsed: f32) -> ControlFlow {
    if input.should_close() {
        return ControlFlow::Exit;
    }
    renderer.render(elapsed);
    ControlFlow::Poll
}

fn resize(context: &WindowedContext, renderer: &mut Renderer<GlDevice>, size: PhysicalSize<u32>) {
    context.resize(size);
    renderer.resize(Extent2D {
        width: size.width,
        height: size.height,
    });
}

fn main() {
    init_logging();

    let (event_loop, context, renderer) = match setup() {
        Ok(state) => state,
        Err(err) => {
            log::error!("{}", err);
            process::exit(-1);
        }
    };

    let mut context = Some(context);
    let mut renderer = Some(renderer);
    let mut input = Input::new();
    let started = Instant::now();
    #[cfg(debug_assertions)]
    let mut fps_counter = fps_counter::FPSCounter::new();

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Poll;

        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => input.close_requested(),
                WindowEvent::KeyboardInput { input: key, .. } => input.process_keyboard(&key),
                WindowEvent::Resized(size) => {
                    if let (Some(context), Some(renderer)) = (&context, &mut renderer) {
                        resize(context, renderer, size);
                    }
                }
                WindowEvent::ScaleFactorChanged { new_inner_size, .. } => {
                    if let (Some(context), Some(renderer)) = (&context, &mut renderer) {
                        resize(context, renderer, *new_inner_size);
                    }
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                if let (Some(context), Some(renderer)) = (&context, &mut renderer) {
                    *control_flow = frame(&input, renderer, started.elapsed().as_secs_f32());
                    if *control_flow == ControlFlow::Exit {
                        return;
                    }
                    if let Err(err) = context.swap_buffers() {
                        log::error!("failed to swap buffers: {}", err);
                    }
                    #[cfg(debug_assertions)]
                    log::trace!("frame: {}", fps_counter.tick());
                }
            }
            Event::LoopDestroyed => {
                // GPU objects go first, while the context is still alive.
                drop(renderer.take());
                drop(context.take());
                log::info!("closed");
            }
            _ => {}
        }
    });
}
