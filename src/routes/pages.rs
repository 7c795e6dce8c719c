use actix_web::{http::header::ContentType, HttpResponse, Responder};

/// Serve the single-page upload form.
///
/// The page holds one selected file and the last response. Upload with no
/// file selected warns client-side and makes no network call; a non-2xx
/// response surfaces a generic failure notice; on success the full JSON body
/// is pretty-printed for inspection.
pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(INDEX_HTML)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Snaplabel - Image Analysis</title>
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            max-width: 700px;
            margin: 40px auto;
            padding: 0 20px;
            color: #222;
        }
        h1 { font-size: 1.6em; }
        .hint { color: #666; font-size: 0.9em; margin-bottom: 20px; }
        button {
            margin-left: 10px;
            padding: 6px 18px;
            border: 1px solid #2a6fb8;
            border-radius: 4px;
            background: #2a6fb8;
            color: white;
            cursor: pointer;
        }
        button:hover { background: #245e9c; }
        .error { color: #b33; margin-top: 16px; }
        pre {
            background: #f5f5f5;
            border: 1px solid #ddd;
            border-radius: 4px;
            padding: 16px;
            overflow-x: auto;
        }
    </style>
</head>
<body>
    <h1>Image Upload + Label Detection</h1>
    <p class="hint">JPEG or PNG, up to 5MB</p>

    <input type="file" id="fileInput" accept="image/jpeg,image/png">
    <button id="uploadButton">Upload and analyze</button>

    <div class="error" id="error" hidden></div>
    <div id="resultContainer" hidden>
        <h2>Result</h2>
        <pre id="result"></pre>
    </div>

    <script>
        const fileInput = document.getElementById('fileInput');
        const errorDiv = document.getElementById('error');
        const resultContainer = document.getElementById('resultContainer');
        const resultPre = document.getElementById('result');

        document.getElementById('uploadButton').addEventListener('click', async () => {
            const file = fileInput.files[0];
            if (!file) {
                alert('Please select an image first.');
                return;
            }

            errorDiv.hidden = true;
            resultContainer.hidden = true;

            const formData = new FormData();
            formData.append('image', file);

            try {
                const response = await fetch('/api/upload', {
                    method: 'POST',
                    body: formData
                });

                if (!response.ok) {
                    throw new Error('Upload failed');
                }

                const data = await response.json();
                resultPre.textContent = JSON.stringify(data, null, 2);
                resultContainer.hidden = false;
            } catch (err) {
                errorDiv.textContent = 'Upload failed. Please try again.';
                errorDiv.hidden = false;
            }
        });
    </script>
</body>
</html>
"#;
