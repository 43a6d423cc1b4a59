//! Deployment and the closing slide.

use vizdeck_common::{ContentNode, Style};

use crate::style::{centered, head_title, markdown_inner, markdown_outer, next_link, panel, TITLE_BACKGROUND};

pub fn deploy() -> ContentNode {
    ContentNode::div(vec![
        head_title("deploy application"),
        panel(
            r#"
Sharing applications is easy with the cloud. This time I used Azure for the first time, and it was very easy too.
[Here you can learn how to deploy a Flask app.](https://docs.microsoft.com/en-us/azure/app-service/containers/how-to-configure-python#flask-app)
"#,
        ),
        panel(
            r#"
1. Make your account and get the CLI.
2. Make a Dash app file.

```python
import dash
import dash_html_components as html

dash_app = dash.Dash(__name__)
app = dash_app.server
dash_app.layout = html.Div([html.H1("hello world")])

if __name__ == "__main__":
    dash_app.run_server(debug=True)
```

3. Make a requirements file.
4. Deploy to azure with the CLI.

```
az login
az webapp up -n <your-app-name> -l <your-location>
```

5. Here we are! [Website](http://dash-sample-beijing.azurewebsites.net/)
[files are on my github.](https://github.com/mazarimono/dash_beijing_deploy_sample)
"#,
        ),
        panel(
            r#"
- Sharing interactive data visualization is easy with Dash and the cloud.
- Collaborating with colleagues and clients gets easier and brings new discoveries.
- It helps to create better services!
"#,
        ),
        next_link("Next: matome", "/matome"),
    ])
}

/// Clicking anywhere on the slide steps through [`conclusion_alternatives`].
pub fn conclusion() -> ContentNode {
    ContentNode::div(vec![
        head_title("conclusion"),
        ContentNode::div(Vec::new()).with_id("conclusion-div").with_style(markdown_outer()),
    ])
    .with_id("conclusion-outside")
    .with_prop("n_clicks", 0)
}

pub fn conclusion_alternatives() -> Vec<ContentNode> {
    let summary = ContentNode::markdown(
        r#"
- Interactive data visualization gives us more information.
- Sharing (apps) and collaborating will create new discoveries.
- Good insights help to create better services!
"#,
    )
    .with_style(markdown_inner());

    let start = ContentNode::div(vec![
        ContentNode::div(vec![
            ContentNode::h2("I think dash can help with this process!").with_style(centered()),
            ContentNode::h2("Let's Start with").with_style(centered()),
        ])
        .with_style(Style::new().set("backgroundColor", TITLE_BACKGROUND).set("borderRadius", 20)),
        ContentNode::div(vec![ContentNode::h2("pip install dash")
            .with_style(Style::new().set("color", "white").set("padding", "2.5%"))])
        .with_style(Style::new().set("backgroundColor", "black").set("borderRadius", 20)),
    ])
    .with_style(Style::new().set("width", "90%").set("margin", "auto"));

    let thanks = ContentNode::div(vec![
        ContentNode::p("谢谢").with_style(
            Style::new().set("textAlign", "center").set("fontSize", 90).set("marginTop", "5%"),
        ),
        ContentNode::image("/assets/python.png").with_style(Style::new().set("width", "30%")),
        ContentNode::p("wechat: xiao_hide")
            .with_style(Style::new().set("textAlign", "center").set("fontSize", 50)),
    ])
    .with_style(Style::new().set("backgroundColor", "white").set("textAlign", "center"));

    vec![summary, start, thanks]
}
