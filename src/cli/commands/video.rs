use hubble::ReturnType;
use std::path::PathBuf;

#[derive(argh::FromArgs)]
#[argh(subcommand, name = "video", description = "get videos")]
pub struct Options {
    #[argh(positional, description = "the video ids")]
    ids: Vec<String>,

    #[argh(
        option,
        short = 't',
        long = "return-type",
        default = "ReturnType::Json",
        description = "how to decode responses: json, text, or content"
    )]
    return_type: ReturnType,

    #[argh(
        option,
        short = 'o',
        long = "out",
        description = "the file to save to, instead of stdout"
    )]
    out: Option<PathBuf>,
}

pub async fn exec(client: &hubble::Client, options: Options) -> anyhow::Result<()> {
    anyhow::ensure!(!options.ids.is_empty(), "missing video id");

    let ids = super::selection(options.ids);
    let bodies = client.video(ids, options.return_type).await?;
    crate::output::write(bodies, options.out.as_deref()).await
}
