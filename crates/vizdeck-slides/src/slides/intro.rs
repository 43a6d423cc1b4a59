//! Opening slides.

use vizdeck_common::{ContentNode, Style};
use vizdeck_data::{DataError, Datasets};

use crate::charts;
use crate::style::{head_title, next_link, panel};

/// The default slide, also shown for unknown routes.
pub fn title() -> ContentNode {
    let logos = ContentNode::div(vec![
        ContentNode::image("/assets/python.png").with_style(
            Style::new().set("width", "20%").set("marginLeft", "5%").set("float", "left"),
        ),
        ContentNode::image("/assets/chomoku-logo.png").with_style(
            Style::new()
                .set("marginTop", "5%")
                .set("width", "20%")
                .set("float", "right")
                .set("marginRight", "5%"),
        ),
    ])
    .with_style(Style::new().set("marginTop", "5%").set("display", "inline-block"));

    ContentNode::div(vec![
        logos,
        ContentNode::p("用 Dash 实现交互式数据可视化").with_style(
            Style::new().set("textAlign", "center").set("marginTop", "5%").set("fontSize", 60),
        ),
        ContentNode::p("PyCon China 北京 2019/10/19").with_style(
            Style::new()
                .set("marginTop", "10%")
                .set("textAlign", "right")
                .set("marginRight", "5%")
                .set("fontSize", 30),
        ),
        ContentNode::p("长目 CEO 小川 英幸").with_style(
            Style::new().set("textAlign", "right").set("marginRight", "5%").set("fontSize", 30),
        ),
        next_link("Next: link_to_web_app", "/web-app"),
    ])
    .with_style(Style::new().set("height", 900))
}

pub fn web_app() -> ContentNode {
    const URL: &str = "https://pyconchina-dash.azurewebsites.net/";
    ContentNode::div(vec![
        head_title("Web App"),
        ContentNode::div(vec![
            ContentNode::image("/assets/qr.png").with_style(
                Style::new().set("width", "30%").set("marginTop", "5%").set("marginBottom", "5%"),
            ),
            ContentNode::link(URL, URL)
                .with_style(Style::new().set("textAlign", "center").set("fontSize", 40)),
        ])
        .with_style(Style::new().set("textAlign", "center").set("padding", "5%")),
        next_link("Next: 自我介绍", "/self-introduce"),
    ])
}

pub fn self_intro(data: &Datasets) -> Result<ContentNode, DataError> {
    let pictures = ContentNode::div(vec![
        ContentNode::image("/assets/me.jpg")
            .with_style(Style::new().set("width", "60%").set("margin", "20%")),
        ContentNode::image("/assets/hannnari.png")
            .with_style(Style::new().set("width", "60%").set("marginLeft", "20%")),
    ])
    .with_style(Style::new().set("width", "40%").set("float", "left"));

    let profile = ContentNode::div(vec![
        ContentNode::p("我叫 小川 英幸（wechat： hide_xiao）"),
        ContentNode::div(vec![
            ContentNode::p("我的事业"),
            ContentNode::p("· I worked as a trader and analyst at Financial Institute."),
            ContentNode::p("· I started using Python 5 years ago(for data analysis)."),
            ContentNode::p("· I founded a company named Chomoku(长目)."),
        ]),
        ContentNode::p("我来自,日本京都（你知吗？）"),
        ContentNode::graph(&charts::city_map(&data.cities)?),
        ContentNode::p("はんなり == 优雅(you1ya3)"),
        ContentNode::p("优雅Python 在每个第三个星期五 "),
    ])
    .with_style(Style::new().set("fontSize", 25).set("margin", "5%"));

    Ok(ContentNode::div(vec![
        head_title("你好，自我介绍"),
        pictures,
        ContentNode::div(vec![profile])
            .with_style(Style::new().set("width", "60%").set("display", "inline-block")),
        next_link("Next: 为什么我来 PyCon CHINA 北京？", "/reasons"),
    ]))
}

pub fn reasons() -> ContentNode {
    ContentNode::div(vec![
        head_title("为什么我来 PyCon CHINA 北京？"),
        panel(
            r#"
1. I have been interested in chinese culture.
    - I learn chinese for a year and half.
    - My company name "Chomoku" is from the old chinese word ["长目飞耳"](https://baike.baidu.com/item/%E9%95%BF%E7%9B%AE%E9%A3%9E%E8%80%B3).
1. Many people say "Chinese programmer quality is the best in the world."
    - My friend who works at a chinese company said so too!
1. I read a book titled "Ant Financial".
    - The most impressive scene was Ant Financial people visiting Square's office.
    - Ant Financial started to think about their own business model.
1. I found PyCon China Beijing.
    - I accidentally found this event in August.
1. Dash is a good framework.
    - I am not a contributor, I am a user.
    - I want to share.
"#,
        ),
        next_link("Next: Today's Menu", "/menu"),
    ])
}

pub fn menu() -> ContentNode {
    ContentNode::div(vec![
        head_title("Today I will talk about"),
        panel(
            r#"
1. Merit of interactive data visualization.
1. About Data Visualization.
1. About Dash.
"#,
        ),
        next_link("Next: Merit of interactive", "/merit"),
    ])
}
