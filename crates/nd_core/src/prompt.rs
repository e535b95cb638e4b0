use crate::types::Article;

/// Instruction text placed before the article list. Asks the model to split
/// the articles into headline and other news and fixes the output fields of
/// each section.
pub const PROMPT_PREAMBLE: &str = "
以下のニュース記事を「注目ニュース」と「その他ニュース」に分類し、指定フォーマットで要約してください。

### 注目ニュース（優先度の高い条件）
- 日本国内の出来事
- 人材業界や採用に関係する出来事
- 海外発でも、日本市場やIndeedの役割に影響が出る可能性が高いもの

#### 出力フォーマット
⚡ 刺激フレーズ（読んでいる人がハッとする短い言葉）
📰 タイトル
✅ 世の中はどう変わるか？
👉 日本国内での採用・人材業界への影響
🟢 CS視点での示唆（既存フローがどう変わるか、先読みして準備すべきこと）
💡 他代理店・他部署との差別化ポイント（自分たちが武器にできること）
🔮 近未来予測（3年以内に起こりそうな変化）

### その他ニュース（それ以外）
📌 タイトル
→ 一言コメント（なぜ重要 or 参考になるかを簡単に）
🔗 URL

記事一覧：
";

/// Renders one article as a bullet line. Article text is not escaped.
pub fn render_article(article: &Article) -> String {
    format!("- {} ({}) {}", article.title, article.link, article.summary)
}

/// Joins the rendered articles with newlines.
pub fn render_articles(articles: &[Article]) -> String {
    articles
        .iter()
        .map(render_article)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Embeds the article list into the fixed instruction template.
pub fn compose_prompt(articles: &[Article]) -> String {
    format!("{}{}\n", PROMPT_PREAMBLE, render_articles(articles))
}
