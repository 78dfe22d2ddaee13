use anyhow::Context;
use hubble::{
    Body,
    Selection,
};
use std::{
    io::Write,
    path::Path,
};

/// Render bodies for output.
///
/// A list of json bodies is rendered as one json array.
/// Everything else is written one after another.
pub fn render(bodies: Selection<Body>) -> anyhow::Result<Vec<u8>> {
    match bodies {
        Selection::One(body) => render_body(body),
        Selection::Many(bodies) if bodies.iter().all(|body| body.as_json().is_some()) => {
            let values: Vec<_> = bodies.into_iter().filter_map(Body::into_json).collect();
            let mut buffer = serde_json::to_vec_pretty(&values)?;
            buffer.push(b'\n');
            Ok(buffer)
        }
        Selection::Many(bodies) => {
            let mut buffer = Vec::new();
            for body in bodies {
                buffer.extend(render_body(body)?);
            }
            Ok(buffer)
        }
    }
}

fn render_body(body: Body) -> anyhow::Result<Vec<u8>> {
    Ok(match body {
        Body::Json(value) => {
            let mut buffer = serde_json::to_vec_pretty(&value)?;
            buffer.push(b'\n');
            buffer
        }
        Body::Text(text) => {
            let mut buffer = text.into_bytes();
            if buffer.last() != Some(&b'\n') {
                buffer.push(b'\n');
            }
            buffer
        }
        Body::Content(bytes) => bytes.to_vec(),
    })
}

/// Write bodies to a file, or stdout if no path is given.
pub async fn write(bodies: Selection<Body>, out: Option<&Path>) -> anyhow::Result<()> {
    let count = bodies.len();
    let buffer = render(bodies)?;

    match out {
        Some(path) => {
            tokio::fs::write(path, &buffer)
                .await
                .with_context(|| format!("failed to write to '{}'", path.display()))?;
            tracing::info!(count, path = %path.display(), "saved");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(&buffer)
                .context("failed to write to stdout")?;
            stdout.flush()?;
        }
    }

    Ok(())
}
