//! OpenAPI (Swagger 2.0) description of the public API.
//!
//! `limit` is documented with a default of 5 as it always has been; the
//! service applies 100 when the parameter is missing. Kept until the
//! published contract is settled.

use serde_json::{json, Value};

use crate::api::{MAX_CODEPOINTS, MAX_LIMIT};
use crate::routes::ucd::UCD_PATH;

pub const DOC_PATH: &str = "/swagger/doc.json";

/// Interactive documentation page.
pub const UI_PATH: &str = "/swagger/index.html";

const SWAGGER_UI_DIST: &str = "https://unpkg.com/swagger-ui-dist@5";

/// Swagger UI page rendering the document served at [`DOC_PATH`].
///
/// Assets load from the public `swagger-ui-dist` package.
pub fn ui_page() -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>FontPeek Public Unicode API</title>
  <link rel="stylesheet" href="{dist}/swagger-ui.css">
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="{dist}/swagger-ui-bundle.js"></script>
  <script>
    window.ui = SwaggerUIBundle({{ url: "{doc}", dom_id: "#swagger-ui" }});
  </script>
</body>
</html>
"##,
        dist = SWAGGER_UI_DIST,
        doc = DOC_PATH,
    )
}

pub fn document() -> Value {
    json!({
        "swagger": "2.0",
        "info": {
            "title": "FontPeek Public Unicode API",
            "version": "1.0",
            "license": {
                "name": "Apache 2.0",
                "url": "http://www.apache.org/licenses/LICENSE-2.0.html"
            }
        },
        "host": "unicode.fontpeek.com",
        "basePath": "/",
        "paths": {
            (UCD_PATH): {
                "get": {
                    "tags": ["directory"],
                    "summary": "Query Unicode characters",
                    "operationId": "unicode-character-directory",
                    "produces": ["application/json"],
                    "parameters": [
                        {
                            "type": "string",
                            "description": format!(
                                "Unicode Point hexadecimal (e.g. 0041), comma-separated, at most {} values",
                                MAX_CODEPOINTS
                            ),
                            "name": "cp",
                            "in": "query"
                        },
                        {
                            "type": "string",
                            "description": "Comma-separated list of fields to include in the response",
                            "name": "fields",
                            "in": "query"
                        },
                        {
                            "maximum": MAX_LIMIT,
                            "minimum": 1,
                            "type": "integer",
                            "default": 5,
                            "description": "How many results to include",
                            "name": "limit",
                            "in": "query"
                        },
                        {
                            "minimum": 0,
                            "type": "integer",
                            "description": "Lookup offset",
                            "name": "offset",
                            "in": "query"
                        }
                    ],
                    "responses": {
                        "200": {
                            "description": "JSON array of glyph records",
                            "schema": {
                                "type": "array",
                                "items": { "type": "object" }
                            }
                        }
                    }
                }
            }
        }
    })
}
