use carrossel::{Compositor, CompositorOpts, Slide};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let input = args
        .next()
        .ok_or_else(|| anyhow::anyhow!("usage: render_slide <slide.json> [out.png]"))?;
    let out = args.next().unwrap_or_else(|| "slide.png".to_string());

    let slide: Slide = serde_json::from_str(&std::fs::read_to_string(&input)?)?;
    let mut compositor = Compositor::new(CompositorOpts::default());
    let png = compositor.composite(&slide)?;
    std::fs::write(&out, &png)?;

    println!("wrote {out} ({} bytes)", png.len());
    Ok(())
}
