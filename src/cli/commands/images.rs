use hubble::{
    Page,
    ReturnType,
};
use std::path::PathBuf;

#[derive(argh::FromArgs)]
#[argh(subcommand, name = "images", description = "get pages of an image collection")]
pub struct Options {
    #[argh(positional, description = "the collection, like \"news\" or \"spacecraft\"")]
    collection: String,

    #[argh(
        positional,
        description = "the page numbers or \"all\", defaults to the first page"
    )]
    pages: Vec<Page>,

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
    let pages = super::page_selection(options.pages);
    let bodies = client.images(&options.collection, pages, options.return_type).await?;
    crate::output::write(bodies, options.out.as_deref()).await
}
