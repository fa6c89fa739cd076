use crate::data::FeatureTable;
use crate::server::api;

pub struct HttpResponse {
    pub status_code: u16,
    pub content_type: &'static str,
    pub body: String,
}

impl HttpResponse {
    fn json(body: String) -> Self {
        Self {
            status_code: 200,
            content_type: "application/json",
            body,
        }
    }
}

pub fn route_request(table: &FeatureTable, method: &str, path: &str, body: &str) -> HttpResponse {
    let route = path.split('?').next().unwrap_or(path);
    match (method, route) {
        ("GET", "/") => HttpResponse {
            status_code: 200,
            content_type: "text/html; charset=utf-8",
            body: index_html(),
        },
        ("GET", "/api/v1/health") => match api::health_payload(table) {
            Ok(payload) => HttpResponse::json(payload),
            Err(err) => error_response(500, &err.to_string()),
        },
        ("GET", "/api/v1/departments") => match api::departments_payload(table) {
            Ok(payload) => HttpResponse::json(payload),
            Err(err) => error_response(500, &err.to_string()),
        },
        ("POST", "/api/v1/team/generate") => match api::generate_payload(table, body) {
            Ok(payload) => HttpResponse::json(payload),
            Err(api::GeneratePayloadError::Parse(err)) => {
                error_response(400, &format!("Invalid request body: {err}"))
            }
            Err(api::GeneratePayloadError::Validation(validation)) => {
                json_payload_response(400, &validation)
            }
            Err(api::GeneratePayloadError::Team(err)) => {
                json_payload_response(400, &api::TeamErrorResponse::from(&err))
            }
            Err(err @ api::GeneratePayloadError::Serialize(_)) => {
                error_response(500, &err.to_string())
            }
        },
        _ => error_response(404, "Route not found"),
    }
}

fn json_payload_response<T: serde::Serialize>(status_code: u16, payload: &T) -> HttpResponse {
    match serde_json::to_string_pretty(payload) {
        Ok(body) => HttpResponse {
            status_code,
            content_type: "application/json",
            body,
        },
        Err(err) => error_response(500, &err.to_string()),
    }
}

fn error_response(status_code: u16, message: &str) -> HttpResponse {
    HttpResponse {
        status_code,
        content_type: "application/json",
        body: format!(
            "{{\n  \"status\": \"error\",\n  \"message\": {}\n}}",
            serde_json::to_string(message).unwrap_or_else(|_| "\"Unknown error\"".to_string())
        ),
    }
}

fn index_html() -> String {
    r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width,initial-scale=1" />
  <title>SynergySelect API Console</title>
  <style>
    body { font-family: Arial, sans-serif; max-width: 900px; margin: 24px auto; padding: 0 12px; }
    .card { border: 1px solid #ddd; border-radius: 8px; padding: 14px; margin: 14px 0; }
    label { display:block; margin: 8px 0 4px; font-weight: 600; }
    input, select { width: 100%; padding: 8px; box-sizing: border-box; }
    button { margin-top: 12px; padding: 8px 14px; }
    pre { background: #111; color: #aef2ae; padding: 12px; overflow: auto; border-radius: 6px; min-height: 180px; }
  </style>
</head>
<body>
  <h1>SynergySelect</h1>
  <p>Budget- and diversity-constrained team generation.</p>

  <div class="card">
    <label for="department">Department</label>
    <select id="department"></select>
    <label for="team-size">Team size</label>
    <input id="team-size" type="number" min="2" value="6" />
    <label for="budget">Total monthly budget</label>
    <input id="budget" type="number" min="0" value="40000" />
    <div><button id="generate-btn">POST /api/v1/team/generate</button></div>
  </div>

  <pre id="output">Ready.</pre>

  <script>
    const output = document.getElementById('output');
    const departmentEl = document.getElementById('department');

    fetch('/api/v1/departments').then(r => r.json()).then(data => {
      for (const d of data.departments) {
        const option = document.createElement('option');
        option.value = d.department;
        option.textContent = d.department + ' (' + d.headcount + ')';
        departmentEl.appendChild(option);
      }
    }).catch(() => {});

    document.getElementById('generate-btn').addEventListener('click', async () => {
      output.textContent = 'Loading…';
      const payload = {
        department: departmentEl.value,
        team_size: Number(document.getElementById('team-size').value),
        total_budget: Number(document.getElementById('budget').value),
      };
      const response = await fetch('/api/v1/team/generate', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify(payload),
      });
      output.textContent = 'HTTP ' + response.status + '\n' + await response.text();
    });
  </script>
</body>
</html>
"#
    .to_string()
}
