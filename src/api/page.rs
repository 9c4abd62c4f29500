//! The form page served at `/`.
//!
//! A single static HTML document: date/time pickers, three numeric inputs
//! (min 0, step 0.01), and a result panel filled in by posting JSON to
//! `/api/predict`.

use axum::response::Html;

pub async fn get_index() -> Html<&'static str> {
    Html(FORM_PAGE)
}

const FORM_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Solar DC Power Forecasting</title>
<style>
    body {
        background-color: #0f1117;
        color: white;
        font-family: sans-serif;
        display: flex;
        justify-content: center;
        padding: 2em 1em;
    }
    .main {
        background-color: #1e1e2f;
        padding: 20px;
        border-radius: 12px;
        max-width: 640px;
        width: 100%;
    }
    h1, h2, label {
        color: #00c0ff;
    }
    h1 { text-align: center; }
    .row {
        display: flex;
        gap: 1em;
        flex-wrap: wrap;
        margin-bottom: 1em;
    }
    .field {
        display: flex;
        flex-direction: column;
        flex: 1;
        min-width: 140px;
    }
    input {
        background-color: #0f1117;
        color: white;
        border: 1px solid #00c0ff;
        border-radius: 6px;
        padding: 0.4em;
        margin-top: 0.3em;
    }
    button {
        background-color: #00c0ff;
        color: white;
        border: none;
        border-radius: 10px;
        padding: 0.6em 1.2em;
        font-weight: bold;
        cursor: pointer;
        transition: 0.3s;
    }
    button:hover { background-color: #0090c0; }
    #result { margin-top: 1em; font-size: 1.2em; }
    #result.error { color: #ff6b6b; }
    #result.ok { color: #7bffb2; }
</style>
</head>
<body>
<div class="main">
    <h1>Solar DC Power Forecasting</h1>
    <p>Provide environmental conditions and date/time to predict the solar DC power output.</p>

    <h2>Date &amp; Time</h2>
    <div class="row">
        <div class="field">
            <label for="date">Select Date</label>
            <input type="date" id="date" value="2020-06-15">
        </div>
        <div class="field">
            <label for="time">Select Time</label>
            <input type="time" id="time" value="14:00">
        </div>
    </div>

    <h2>Environmental Conditions</h2>
    <div class="row">
        <div class="field">
            <label for="irradiation">Irradiation (W/m&sup2;)</label>
            <input type="number" id="irradiation" min="0" step="0.01" value="0.00">
        </div>
        <div class="field">
            <label for="module_temperature">Module Temp (&deg;C)</label>
            <input type="number" id="module_temperature" min="0" step="0.01" value="0.00">
        </div>
        <div class="field">
            <label for="ambient_temperature">Ambient Temp (&deg;C)</label>
            <input type="number" id="ambient_temperature" min="0" step="0.01" value="0.00">
        </div>
    </div>

    <button id="predict">Predict DC Power</button>
    <div id="result"></div>
</div>
<script>
    const result = document.getElementById('result');
    document.getElementById('predict').addEventListener('click', async () => {
        const body = {
            date: document.getElementById('date').value,
            time: document.getElementById('time').value,
            irradiation: parseFloat(document.getElementById('irradiation').value),
            module_temperature: parseFloat(document.getElementById('module_temperature').value),
            ambient_temperature: parseFloat(document.getElementById('ambient_temperature').value),
        };
        try {
            const response = await fetch('/api/predict', {
                method: 'POST',
                headers: { 'Content-Type': 'application/json' },
                body: JSON.stringify(body),
            });
            const payload = await response.json();
            if (response.ok) {
                result.className = 'ok';
                result.textContent = 'Predicted DC Power: ' + payload.display;
            } else {
                result.className = 'error';
                result.textContent = 'An error occurred: ' + payload.error_message;
            }
        } catch (err) {
            result.className = 'error';
            result.textContent = 'An error occurred: ' + err;
        }
    });
</script>
</body>
</html>
"#;
