/// File name of the single document inside every page directory
pub const INDEX_FILE: &str = "index.html";

const DEFAULT_DOCUMENT: &str = "<!DOCTYPE html>
<html lang=\"en\">
  <head>
    <meta charset=\"UTF-8\">
    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">
    <title>New page</title>
  </head>
  <body>
    <main class='container'>
      <p class='user-p'>Your text goes here</p>
      <p class='center-p'>Your description goes here</p>
      <a class='link shake' href='#'>Click here</a>
    </main>
  </body>
</html>
";

/// The document written into a freshly created page.
///
/// Fragment markup uses single-quoted attributes; the mutation patterns in
/// `fragment` depend on that exact form.
pub fn default_document() -> &'static str {
    DEFAULT_DOCUMENT
}
