use hubble::ReturnType;
use std::path::PathBuf;

#[derive(argh::FromArgs)]
#[argh(subcommand, name = "glossary-term", description = "lookup glossary terms")]
pub struct Options {
    #[argh(positional, description = "the terms to lookup")]
    terms: Vec<String>,

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
    anyhow::ensure!(!options.terms.is_empty(), "missing term");

    let terms = super::selection(options.terms);
    let bodies = client.glossary_term(terms, options.return_type).await?;
    crate::output::write(bodies, options.out.as_deref()).await
}
